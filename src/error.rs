//! Errors of the audio core (decode → resample → encode).

use thiserror::Error;

/// The two failure families of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed container: not RIFF/WAVE, missing or broken chunks.
    Format,
    /// Structurally valid WAV using an encoding we do not decode.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    #[error("not a WAV stream: expected RIFF/WAVE signature")]
    NotRiffWave,
    #[error("truncated WAV: {0}")]
    Truncated(&'static str),
    #[error("missing fmt chunk")]
    MissingFmt,
    #[error("missing data chunk")]
    MissingData,
    #[error("malformed fmt chunk: {0}")]
    BadFmt(&'static str),
    #[error("unsupported WAV format code {0} (only PCM=1 and IEEE float=3)")]
    UnsupportedFormatCode(u16),
    #[error("unsupported bit depth {bits} for format code {format_code}")]
    UnsupportedBitDepth { format_code: u16, bits: u16 },
}

impl AudioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AudioError::UnsupportedFormatCode(_) | AudioError::UnsupportedBitDepth { .. } => {
                ErrorKind::Unsupported
            }
            _ => ErrorKind::Format,
        }
    }
}

pub type AudioResult<T> = Result<T, AudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_split_format_from_unsupported() {
        assert_eq!(AudioError::NotRiffWave.kind(), ErrorKind::Format);
        assert_eq!(AudioError::MissingData.kind(), ErrorKind::Format);
        assert_eq!(AudioError::UnsupportedFormatCode(2).kind(), ErrorKind::Unsupported);
        assert_eq!(
            AudioError::UnsupportedBitDepth { format_code: 1, bits: 12 }.kind(),
            ErrorKind::Unsupported
        );
    }

    #[test]
    fn messages_name_the_offender() {
        assert!(AudioError::UnsupportedFormatCode(2).to_string().contains('2'));
        let msg = AudioError::UnsupportedBitDepth { format_code: 3, bits: 64 }.to_string();
        assert!(msg.contains("64"));
    }
}
