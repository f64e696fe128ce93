//! PDM text (DAT) import and export.
//!
//! The DAT format is line-oriented text: comment-style header lines naming
//! the sample rate and channel count, followed by `<time> <amplitude>` data
//! rows. Import is tolerant — malformed or unmatched lines are skipped, never
//! fatal — and rounds each amplitude to the nearest of {-1, 0, 1} before
//! mapping it to a pulse. Export drains the stream in FIFO order, emitting
//! `time = index / sample_rate` and the pulse amplitude per row.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::common::bit::Bit;
use crate::common::error::Result;
use crate::common::stream::Bitstream;
use crate::deterministic::bit::DeterministicBit;
use crate::deterministic::stream::DeterministicBitstream;

/// Header metadata of a DAT file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatHeader {
    /// Samples per second, from the `; Sample Rate <int>` line (0 if absent).
    pub sample_rate: u32,
    /// Channel count, from the `; Channels <int>` line (0 if absent).
    pub channels: u32,
}

/// Reads a PDM bitstream from DAT-format text.
///
/// Header lines set the returned [`DatHeader`]; each data row contributes one
/// pulse. Amplitudes round to the nearest of {-1, 0, 1}; a rounded value of
/// +1 maps to a high pulse, anything else to a low pulse. Lines matching no
/// known shape are skipped.
///
/// # Errors
///
/// Returns [`crate::common::error::Error::Io`] if the underlying reader
/// fails. Malformed content alone never fails the parse.
pub fn read_dat<R: Read>(reader: R) -> Result<(DeterministicBitstream, DatHeader)> {
    let mut stream = DeterministicBitstream::new();
    let mut header = DatHeader::default();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix(';') {
            let rest = rest.trim();
            if let Some(rate) = rest.strip_prefix("Sample Rate") {
                if let Ok(rate) = rate.trim().parse::<u32>() {
                    header.sample_rate = rate;
                }
            } else if let Some(channels) = rest.strip_prefix("Channels") {
                if let Ok(channels) = channels.trim().parse::<u32>() {
                    header.channels = channels;
                }
            }
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let (Some(time), Some(amplitude), None) = (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        if time.parse::<f64>().is_err() {
            continue;
        }
        let Ok(amplitude) = amplitude.parse::<f64>() else {
            continue;
        };
        let rounded = amplitude.round().clamp(-1.0, 1.0);
        stream.push(DeterministicBit::new(rounded >= 1.0));
    }

    Ok((stream, header))
}

/// Reads a PDM bitstream from a DAT file on disk.
///
/// # Errors
///
/// Returns [`crate::common::error::Error::Io`] if the file cannot be opened
/// or read.
pub fn read_dat_file(path: impl AsRef<Path>) -> Result<(DeterministicBitstream, DatHeader)> {
    read_dat(File::open(path)?)
}

/// Writes a PDM bitstream as DAT-format text, draining it in FIFO order.
///
/// Each pulse becomes one `<time> <amplitude>` row with
/// `time = index / sample_rate` and `amplitude = ±1`.
///
/// # Errors
///
/// Returns [`crate::common::error::Error::Io`] if the underlying writer
/// fails.
pub fn write_dat<W: Write>(
    writer: W,
    stream: &mut DeterministicBitstream,
    header: DatHeader,
) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "; Sample Rate {}", header.sample_rate)?;
    writeln!(writer, "; Channels {}", header.channels)?;

    let mut index = 0u64;
    while let Ok(bit) = stream.pop() {
        let time = index as f64 / f64::from(header.sample_rate.max(1));
        writeln!(writer, " {time}  {} ", bit.to_real())?;
        index += 1;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a PDM bitstream to a DAT file on disk, draining the stream.
///
/// # Errors
///
/// Returns [`crate::common::error::Error::Io`] if the file cannot be created
/// or written.
pub fn write_dat_file(
    path: impl AsRef<Path>,
    stream: &mut DeterministicBitstream,
    header: DatHeader,
) -> Result<()> {
    write_dat(File::create(path)?, stream, header)
}
