use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::Path,
};

use binrw::{io::BufReader, BinReaderExt};

use crate::structs::{ChunkHeader, FmtChunk, RiffHeader};

/// Format tag of uncompressed integer PCM.
pub const WAVE_FORMAT_PCM: u16 = 1;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum WavError {
    #[error("Only 16-bit PCM WAV files are supported (got {0}-bit)")]
    UnsupportedBitDepth(u16),
    #[error("Unsupported format tag {0}, only uncompressed PCM is supported")]
    NotPcm(u16),
    #[error("The fmt chunk claims zero channels")]
    NoChannels,
    #[error("The fmt chunk claims a sample rate of zero")]
    ZeroSampleRate,
    #[error("The fmt chunk is {0} bytes, expected at least 16")]
    ShortFmtChunk(u32),
    #[error("No fmt chunk before the data chunk")]
    MissingFmt,
    #[error("No data chunk before the end of the file")]
    MissingData,
    #[error("The data chunk is {size} bytes, not a multiple of the {frame_size} byte frame size")]
    MisalignedData { size: u32, frame_size: u32 },
    #[error("Malformed wav container: {0}")]
    Parse(#[from] binrw::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Stream parameters as reported by the `fmt ` chunk, with the frame
/// count derived from the data chunk length.
#[derive(Debug, Clone, Copy)]
pub struct WavInfo {
    pub channel_count: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub frame_count: u32,
}

impl WavInfo {
    pub fn duration_seconds(&self) -> f64 {
        f64::from(self.frame_count) / f64::from(self.sample_rate)
    }
}

/// A fully decoded WAV file: format info plus the interleaved samples.
#[derive(Debug, Clone)]
pub struct ParsedWav {
    pub info: WavInfo,
    /// `frame_count * channel_count` samples, channel-interleaved
    /// (L, R, L, R, .. for stereo).
    pub samples: Vec<i16>,
}

impl ParsedWav {
    /// Walks the chunk list up to the first `data` chunk and decodes its
    /// contents. Unknown chunks are skipped, anything after the data
    /// chunk is ignored.
    pub fn parse_reader<RS: Read + Seek>(f: &mut RS) -> Result<Self, WavError> {
        let _riff: RiffHeader = f.read_le()?;
        let mut fmt_chunk: Option<FmtChunk> = None;
        let (fmt, raw_data) = loop {
            let chunk: ChunkHeader = match f.read_le() {
                Ok(chunk) => chunk,
                Err(e) if e.is_eof() => {
                    return Err(WavError::MissingData);
                }
                Err(e) => return Err(e.into()),
            };
            match &chunk.id {
                b"fmt " => {
                    if chunk.size < FmtChunk::byte_len() {
                        return Err(WavError::ShortFmtChunk(chunk.size));
                    }
                    fmt_chunk = Some(f.read_le()?);
                    // skip format extensions, plus the pad byte if the
                    // chunk size is odd
                    f.seek(SeekFrom::Current(
                        i64::from(chunk.size - FmtChunk::byte_len()) + i64::from(chunk.size % 2),
                    ))?;
                }
                b"data" => {
                    let fmt = fmt_chunk.ok_or(WavError::MissingFmt)?;
                    let mut raw_data = vec![0; chunk.size as usize];
                    f.read_exact(&mut raw_data)?;
                    break (fmt, raw_data);
                }
                _ => {
                    // pad byte after odd-sized chunks
                    f.seek(SeekFrom::Current(
                        i64::from(chunk.size) + i64::from(chunk.size % 2),
                    ))?;
                }
            }
        };
        if fmt.bits_per_sample != 16 {
            return Err(WavError::UnsupportedBitDepth(fmt.bits_per_sample));
        }
        if fmt.audio_format != WAVE_FORMAT_PCM {
            return Err(WavError::NotPcm(fmt.audio_format));
        }
        if fmt.channel_count == 0 {
            return Err(WavError::NoChannels);
        }
        if fmt.sample_rate == 0 {
            return Err(WavError::ZeroSampleRate);
        }
        let frame_size = u32::from(fmt.channel_count) * 2;
        if raw_data.len() as u32 % frame_size != 0 {
            return Err(WavError::MisalignedData {
                size: raw_data.len() as u32,
                frame_size,
            });
        }
        let samples = raw_data
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(ParsedWav {
            info: WavInfo {
                channel_count: fmt.channel_count,
                sample_rate: fmt.sample_rate,
                bits_per_sample: fmt.bits_per_sample,
                frame_count: raw_data.len() as u32 / frame_size,
            },
            samples,
        })
    }

    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, WavError> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::parse_reader(&mut reader)
    }
}
