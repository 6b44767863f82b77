use std::fs::File;
use std::io::{self, IsTerminal, Write};

use bin2text::base16;
use bin2text::error::Result;
use bin2text::types::OutputDest;

pub struct OutputConfig {
    pub dest: OutputDest,
    pub force: bool,
    pub newline: bool,
}

pub fn write_output(data: &[u8], config: &OutputConfig) -> Result<()> {
    match &config.dest {
        OutputDest::File(path) => {
            let mut file = File::create(path)?;
            file.write_all(data)?;
            log::info!("wrote {} bytes to {}", data.len(), path.display());
        }
        OutputDest::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if handle.is_terminal() && !config.force && std::str::from_utf8(data).is_err() {
                log::warn!("binary output ({} bytes); showing hex, use --force for raw bytes", data.len());
                write_hex_preview(&mut handle, data)?;
            } else {
                handle.write_all(data)?;
                if config.newline {
                    handle.write_all(b"\n")?;
                }
            }
            handle.flush()?;
        }
    }
    Ok(())
}

const BYTES_PER_LINE: usize = 16;
const MAX_LINES: usize = 32;

fn write_hex_preview<W: Write>(w: &mut W, data: &[u8]) -> io::Result<()> {
    for (line, chunk) in data.chunks(BYTES_PER_LINE).take(MAX_LINES).enumerate() {
        let printable: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect();
        writeln!(
            w,
            "{:08X}  {:<32}  |{}|",
            line * BYTES_PER_LINE,
            base16::encode(chunk),
            printable
        )?;
    }
    let shown = BYTES_PER_LINE * MAX_LINES;
    if data.len() > shown {
        writeln!(w, "... ({} more bytes)", data.len() - shown)?;
    }
    Ok(())
}
