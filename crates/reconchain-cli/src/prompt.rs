//! Terminal adapter for the [`Prompt`] port.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::Mutex;

use tracing::trace;

use reconchain_core::{
    application::{ApplicationError, ports::Prompt},
    error::ReconResult,
};

/// Line-based prompt over a reader and a writer, stdin and a std stream in production.
pub struct TerminalPrompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl TerminalPrompt<BufReader<io::Stdin>, Box<dyn Write + Send>> {
    /// Read answers from stdin. Questions go to stdout, or to stderr when
    /// stdout is reserved for machine-readable output.
    pub fn stdio(questions_to_stderr: bool) -> Self {
        let output: Box<dyn Write + Send> = if questions_to_stderr {
            Box::new(io::stderr())
        } else {
            Box::new(io::stdout())
        };
        Self::new(BufReader::new(io::stdin()), output)
    }
}

impl<R, W> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        match self.output.into_inner() {
            Ok(output) => output,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn prompt_io(e: io::Error) -> ApplicationError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
}

impl<R, W> Prompt for TerminalPrompt<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    fn ask(&self, question: &str) -> ReconResult<String> {
        {
            let mut output = self
                .output
                .lock()
                .map_err(|_| ApplicationError::LockPoisoned)?;
            output.write_all(question.as_bytes()).map_err(prompt_io)?;
            output.flush().map_err(prompt_io)?;
        }

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .read_line(&mut line)
            .map_err(prompt_io)?;

        if read == 0 {
            return Err(ApplicationError::InputClosed {
                prompt: question.to_string(),
            }
            .into());
        }

        let answer = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&line)
            .to_string();
        trace!(question, answer = %answer, "Prompt answered");
        Ok(answer)
    }

    fn notify(&self, message: &str) -> ReconResult<()> {
        let mut output = self
            .output
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        writeln!(output, "{message}").map_err(prompt_io)?;
        output.flush().map_err(prompt_io)?;
        Ok(())
    }
}
