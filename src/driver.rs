// Prompt, read, echo, average, factorials.

use std::io::{BufRead, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ProcessorError, Result};
use crate::input::TokenReader;
use crate::policy::Policies;
use crate::processor::ArrayProcessor;
use crate::report::{self, Report};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug)]
pub struct Options {
    pub policies: Policies,
    pub format: OutputFormat,
    pub precision: usize,
    pub prompt: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            policies: Policies::default(),
            format: OutputFormat::Text,
            precision: 2,
            prompt: true,
        }
    }
}

pub fn run<R: BufRead, W: Write>(input: R, out: &mut W, options: &Options) -> Result<()> {
    let mut tokens = TokenReader::new(input);
    // Prompts would corrupt the JSON document.
    let prompt = options.prompt && options.format == OutputFormat::Text;

    if prompt {
        writeln!(out, "Enter the size of the array:")?;
        out.flush()?;
    }
    let size = read_size(&mut tokens)?;

    let processor = if prompt {
        ArrayProcessor::read(size, &mut tokens, Some(&mut *out), options.policies)?
    } else {
        ArrayProcessor::read::<_, W>(size, &mut tokens, None, options.policies)?
    };

    if processor.is_empty() {
        info!("array is empty, nothing to average");
    }

    // Never read past the last line we needed, stdin may be a terminal.
    if tokens.buffered() > 0 {
        debug!("ignoring {} trailing tokens", tokens.buffered());
    }

    match options.format {
        OutputFormat::Text => {
            writeln!(out, "{}", report::array_line(processor.values()))?;
            let average = processor.odd_index_average()?;
            writeln!(out, "{}", report::average_line(average, options.precision))?;
            let factorials = processor.factorials()?;
            writeln!(out, "{}", report::factorials_line(&factorials))?;
        }
        OutputFormat::Json => {
            let report = Report {
                size,
                array: processor.values().to_vec(),
                odd_index_average: processor.odd_index_average()?,
                factorials: processor.factorials()?,
            };
            writeln!(out, "{}", report.to_json()?)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn read_size<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<usize> {
    let size = match tokens.next_i64()? {
        Some(size) => size,
        None => {
            return Err(ProcessorError::InputExhausted {
                expected: 1,
                read: 0,
            })
        }
    };
    usize::try_from(size).map_err(|_| ProcessorError::InvalidSize(size))
}
