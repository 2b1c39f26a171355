use crate::domain::model::Address;
use crate::domain::ports::AddressLookup;
use crate::utils::error::{CepError, Result};
use std::io::{BufRead, ErrorKind, Write};

pub const PROMPT: &str = "Digite seu CEP: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Prints the prompt and reads one line. EOF yields an empty string, which
/// the lookup then rejects as invalid input.
pub fn prompt_cep<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => Ok(line),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            Err(CepError::invalid_input("O CEP contém caracteres inválidos."))
        }
        Err(e) => Err(e.into()),
    }
}

/// Prints the user-facing message and suggestion for a failed run and
/// returns the process exit code.
pub fn report_error<W: Write>(output: &mut W, err: &CepError) -> i32 {
    let _ = writeln!(output, "\n❌ {}", err.user_friendly_message());
    let _ = writeln!(output, "💡 {}", err.recovery_suggestion());
    let _ = output.flush();
    err.severity().exit_code()
}

pub fn render_address<W: Write>(output: &mut W, address: &Address) -> Result<()> {
    writeln!(output, "\n|***************ENDEREÇO****************|")?;
    writeln!(output, "LOGRADOURO: {}", address.street)?;
    writeln!(output, "CIDADE: {}", address.city)?;
    writeln!(output, "BAIRRO: {}", address.neighborhood)?;
    writeln!(output, "UF: {}", address.state)?;
    Ok(())
}

pub fn render_json<W: Write>(output: &mut W, address: &Address) -> Result<()> {
    serde_json::to_writer_pretty(&mut *output, address).map_err(std::io::Error::from)?;
    writeln!(output)?;
    Ok(())
}

/// Runs one lookup: prompts when no code was given, then renders the result.
pub async fn run<L, R, W>(
    lookup: &L,
    cep: Option<&str>,
    format: OutputFormat,
    input: &mut R,
    output: &mut W,
) -> Result<Address>
where
    L: AddressLookup + ?Sized,
    R: BufRead,
    W: Write,
{
    let raw = match cep {
        Some(code) => code.to_string(),
        None => prompt_cep(input, output)?,
    };

    let address = lookup.lookup(&raw).await?;

    match format {
        OutputFormat::Text => render_address(output, &address)?,
        OutputFormat::Json => render_json(output, &address)?,
    }
    output.flush()?;

    Ok(address)
}
