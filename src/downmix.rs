use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownmixError {
    #[error("Unsupported channel count {0}, only mono and stereo files can be converted")]
    UnsupportedChannelCount(u16),
}

/// The channel layouts the converter knows how to reduce. Anything
/// beyond stereo is rejected up front instead of being mishandled.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ChannelLayout {
    Mono,
    Stereo,
}

impl ChannelLayout {
    pub fn from_count(count: u16) -> Result<Self, DownmixError> {
        match count {
            1 => Ok(ChannelLayout::Mono),
            2 => Ok(ChannelLayout::Stereo),
            n => Err(DownmixError::UnsupportedChannelCount(n)),
        }
    }

    pub fn channels(&self) -> u16 {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChannelLayout::Mono => "mono",
            ChannelLayout::Stereo => "stereo",
        }
    }
}

/// Reduces an interleaved sample stream to a single channel. Mono
/// passes through unchanged, stereo pairs are averaged with truncating
/// integer division. Lossy, not reversible.
pub fn downmix_to_mono(samples: &[i16], layout: ChannelLayout) -> Vec<i16> {
    match layout {
        ChannelLayout::Mono => samples.to_vec(),
        ChannelLayout::Stereo => samples
            .chunks_exact(2)
            .map(|pair| ((i32::from(pair[0]) + i32::from(pair[1])) / 2) as i16)
            .collect(),
    }
}

#[cfg(test)]
mod test {
    use crate::downmix::{downmix_to_mono, ChannelLayout, DownmixError};

    #[test]
    pub fn mono_is_identity() {
        let samples = [1i16, -1, i16::MAX, i16::MIN];
        assert_eq!(
            downmix_to_mono(&samples, ChannelLayout::Mono),
            samples.to_vec()
        );
    }

    #[test]
    pub fn stereo_averages_pairs() {
        let samples = [100i16, 200, -100, -200, i16::MAX, i16::MAX, 3, 4];
        assert_eq!(
            downmix_to_mono(&samples, ChannelLayout::Stereo),
            vec![150, -150, i16::MAX, 3]
        );
    }

    #[test]
    pub fn stereo_average_truncates_toward_zero() {
        // (-3 + 0) / 2 is -1 with two's-complement truncating division
        assert_eq!(downmix_to_mono(&[-3, 0], ChannelLayout::Stereo), vec![-1]);
        assert_eq!(downmix_to_mono(&[3, 0], ChannelLayout::Stereo), vec![1]);
    }

    #[test]
    pub fn layout_from_count() {
        assert_eq!(ChannelLayout::from_count(1).unwrap(), ChannelLayout::Mono);
        assert_eq!(ChannelLayout::from_count(2).unwrap(), ChannelLayout::Stereo);
        assert!(matches!(
            ChannelLayout::from_count(6),
            Err(DownmixError::UnsupportedChannelCount(6))
        ));
    }
}
