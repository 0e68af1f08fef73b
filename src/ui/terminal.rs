use std::io::{self, Write};

use crate::usecases::contracts::LineTerminal;

/// Stdin/stdout terminal; secrets are read without echo.
pub struct StdTerminal;

impl LineTerminal for StdTerminal {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_owned()))
    }

    fn prompt_secret(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match rpassword::prompt_password(prompt) {
            Ok(password) => Ok(Some(password.trim().to_owned())),
            Err(source) if source.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(source) => Err(source),
        }
    }
}
