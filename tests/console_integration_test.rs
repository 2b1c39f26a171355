use anyhow::Result;
use busca_cep::app::console::{self, OutputFormat, PROMPT};
use busca_cep::{CepError, ViaCepService};
use httpmock::prelude::*;
use std::io::Cursor;

#[tokio::test]
async fn test_prompted_lookup_prints_address_block() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/01001000/json");
        then.status(200).json_body(serde_json::json!({
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "ddd": "11"
        }));
    });

    let service = ViaCepService::with_base_url(&server.base_url())?;
    let mut input = Cursor::new("01001-000\n");
    let mut output = Vec::new();

    console::run(&service, None, OutputFormat::Text, &mut input, &mut output).await?;

    api_mock.assert();
    let text = String::from_utf8(output)?;
    assert!(text.starts_with(PROMPT));
    assert!(text.contains("LOGRADOURO: Praça da Sé"));
    assert!(text.contains("CIDADE: São Paulo"));
    assert!(text.contains("BAIRRO: Sé"));
    assert!(text.contains("UF: SP"));
    Ok(())
}

#[tokio::test]
async fn test_json_output_passes_through_optional_fields() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/50030230/json");
        then.status(200).json_body(serde_json::json!({
            "cep": "50030-230",
            "logradouro": "Rua do Bom Jesus",
            "bairro": "Recife",
            "localidade": "Recife",
            "uf": "PE",
            "ibge": "2611606",
            "siafi": "2531"
        }));
    });

    let service = ViaCepService::with_base_url(&server.base_url())?;
    let mut input = Cursor::new("");
    let mut output = Vec::new();

    console::run(
        &service,
        Some("50030-230"),
        OutputFormat::Json,
        &mut input,
        &mut output,
    )
    .await?;

    let json: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(json["city"], "Recife");
    assert_eq!(json["ibge_code"], "2611606");
    assert_eq!(json["siafi_code"], "2531");
    assert!(json.get("complement").is_none());
    Ok(())
}

#[tokio::test]
async fn test_failed_lookup_renders_nothing_after_prompt() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/99999999/json");
        then.status(200).json_body(serde_json::json!({"erro": "true"}));
    });

    let service = ViaCepService::with_base_url(&server.base_url())?;
    let mut input = Cursor::new("99999999\n");
    let mut output = Vec::new();

    let err = console::run(&service, None, OutputFormat::Text, &mut input, &mut output)
        .await
        .unwrap_err();

    assert!(matches!(err, CepError::NotFound { .. }));
    assert!(err.user_friendly_message().contains("99999999"));
    assert_eq!(String::from_utf8(output)?, PROMPT);
    Ok(())
}
