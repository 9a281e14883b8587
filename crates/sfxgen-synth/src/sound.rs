//! Rendered PCM buffers and the playable sound handle.

use std::io::Write;

use crate::error::{SynthError, SynthResult};
use crate::wav::{pcm_hash, samples_to_pcm16, write_wav, write_wav_to_vec, WavFormat};

/// Shape of a PCM buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferDesc {
    /// Number of channels. Always 1 for synthesized sounds.
    pub channel_count: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of sample frames.
    pub frame_count: usize,
}

impl BufferDesc {
    /// Describes a mono buffer.
    pub fn mono(sample_rate: u32, frame_count: usize) -> Self {
        Self {
            channel_count: 1,
            sample_rate,
            frame_count,
        }
    }
}

/// Mono PCM samples in `[-1, 1]` plus their descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundBuffer {
    desc: BufferDesc,
    samples: Vec<f64>,
}

impl SoundBuffer {
    /// Creates a buffer, checking that the descriptor matches the samples.
    ///
    /// # Errors
    /// Returns [`SynthError::InvalidBuffer`] if the buffer is not mono, the
    /// sample rate is zero, or the frame count disagrees with the samples.
    pub fn new(desc: BufferDesc, samples: Vec<f64>) -> SynthResult<Self> {
        if desc.channel_count != 1 {
            return Err(SynthError::invalid_buffer(format!(
                "expected 1 channel, got {}",
                desc.channel_count
            )));
        }
        if desc.sample_rate == 0 {
            return Err(SynthError::invalid_buffer("sample rate must be positive"));
        }
        if desc.frame_count != samples.len() {
            return Err(SynthError::invalid_buffer(format!(
                "frame count {} does not match {} samples",
                desc.frame_count,
                samples.len()
            )));
        }
        Ok(Self { desc, samples })
    }

    /// Wraps mono samples, deriving the descriptor from them.
    pub fn mono(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            desc: BufferDesc::mono(sample_rate, samples.len()),
            samples,
        }
    }

    /// Buffer descriptor.
    pub fn desc(&self) -> &BufferDesc {
        &self.desc
    }

    /// Samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the buffer, returning its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.desc.frame_count as f64 / self.desc.sample_rate as f64
    }
}

/// Playable sound produced from a rendered buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    buffer: SoundBuffer,
}

impl Sound {
    /// Wraps a rendered buffer.
    pub fn new(buffer: SoundBuffer) -> Self {
        Self { buffer }
    }

    /// Underlying PCM buffer.
    pub fn buffer(&self) -> &SoundBuffer {
        &self.buffer
    }

    /// Consumes the sound, returning its buffer.
    pub fn into_buffer(self) -> SoundBuffer {
        self.buffer
    }

    fn format(&self) -> WavFormat {
        WavFormat::mono(self.buffer.desc.sample_rate)
    }

    /// Encodes the sound as a 16-bit mono WAV file.
    pub fn to_wav(&self) -> Vec<u8> {
        write_wav_to_vec(&self.format(), &samples_to_pcm16(&self.buffer.samples))
    }

    /// Writes the sound as a 16-bit mono WAV file.
    ///
    /// # Errors
    /// Returns [`SynthError::Io`] if the writer fails.
    pub fn write_wav<W: Write>(&self, writer: &mut W) -> SynthResult<()> {
        write_wav(writer, &self.format(), &samples_to_pcm16(&self.buffer.samples))?;
        Ok(())
    }

    /// BLAKE3 hex digest of the 16-bit PCM payload.
    pub fn pcm_hash(&self) -> String {
        pcm_hash(&samples_to_pcm16(&self.buffer.samples))
    }
}

impl From<SoundBuffer> for Sound {
    fn from(buffer: SoundBuffer) -> Self {
        Self::new(buffer)
    }
}
