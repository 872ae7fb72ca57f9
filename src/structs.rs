use binrw::binrw;

// note: a WAV file is a little-endian RIFF container. Chunks are word aligned,
// the pad byte is not counted in the chunk size.

#[binrw]
#[brw(little, magic = b"RIFF")]
#[br(assert(&wave == b"WAVE", "RIFF container is not a WAVE file"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct RiffHeader {
    pub file_size: u32,
    pub wave: [u8; 4],
}

impl RiffHeader {
    pub fn byte_len() -> u32 {
        12
    }
}

#[binrw]
#[brw(little)]
#[derive(Debug, Default, Clone, Copy)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub size: u32,
}

impl ChunkHeader {
    pub fn byte_len() -> u32 {
        8
    }
}

/// The fixed 16-byte part of the `fmt ` chunk. Format extensions
/// (cbSize and everything after it) are skipped by the parser.
#[binrw]
#[brw(little)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FmtChunk {
    pub audio_format: u16,
    pub channel_count: u16,
    pub sample_rate: u32,
    pub bytes_per_second: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl FmtChunk {
    pub fn byte_len() -> u32 {
        16
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use binrw::{BinReaderExt, BinWriterExt};

    use crate::structs::{ChunkHeader, FmtChunk, RiffHeader};

    #[test]
    pub fn check_byte_lens() {
        let mut buf = Vec::new();

        let riff = RiffHeader {
            wave: *b"WAVE",
            ..Default::default()
        };
        Cursor::new(&mut buf).write_le(&riff).unwrap();
        assert_eq!(RiffHeader::byte_len() as usize, buf.len());

        buf.clear();
        let chunk = ChunkHeader::default();
        Cursor::new(&mut buf).write_le(&chunk).unwrap();
        assert_eq!(ChunkHeader::byte_len() as usize, buf.len());

        buf.clear();
        let fmt = FmtChunk::default();
        Cursor::new(&mut buf).write_le(&fmt).unwrap();
        assert_eq!(FmtChunk::byte_len() as usize, buf.len());
    }

    #[test]
    pub fn parse_fmt_chunk() {
        let bytes: [u8; 16] = [
            0x01, 0x00, // PCM
            0x02, 0x00, // stereo
            0x44, 0xAC, 0x00, 0x00, // 44100 Hz
            0x10, 0xB1, 0x02, 0x00, // 176400 bytes/s
            0x04, 0x00, // block align
            0x10, 0x00, // 16 bit
        ];
        let fmt: FmtChunk = Cursor::new(&bytes).read_le().unwrap();
        assert_eq!(fmt.audio_format, 1);
        assert_eq!(fmt.channel_count, 2);
        assert_eq!(fmt.sample_rate, 44100);
        assert_eq!(fmt.bytes_per_second, 176400);
        assert_eq!(fmt.block_align, 4);
        assert_eq!(fmt.bits_per_sample, 16);
    }

    #[test]
    pub fn reject_non_wave_riff() {
        let mut buf = Vec::new();
        Cursor::new(&mut buf)
            .write_le(&RiffHeader {
                file_size: 4,
                wave: *b"AVI ",
            })
            .unwrap();
        assert!(Cursor::new(&buf).read_le::<RiffHeader>().is_err());
    }
}
