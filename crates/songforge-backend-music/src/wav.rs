//! Deterministic WAV writer.
//!
//! Writes 16-bit PCM mono WAV files with no timestamps or variable metadata.
//! The BLAKE3 hash of the PCM payload identifies a preview independently of
//! the container bytes.

use crate::error::{MelodyError, MelodyResult};

/// Size of the canonical RIFF/WAVE header.
pub const WAV_HEADER_LEN: usize = 44;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// RIFF header for a data chunk of `data_size` bytes.
    ///
    /// Fails when the RIFF chunk size would not fit in 32 bits.
    pub fn header(&self, data_size: usize) -> MelodyResult<[u8; WAV_HEADER_LEN]> {
        let too_large = || MelodyError::WavTooLarge { bytes: data_size };
        let data_len = u32::try_from(data_size).map_err(|_| too_large())?;
        let riff_len = data_len
            .checked_add((WAV_HEADER_LEN - 8) as u32)
            .ok_or_else(too_large)?;

        let mut header = [0u8; WAV_HEADER_LEN];
        let fields: [&[u8]; 13] = [
            b"RIFF",
            &riff_len.to_le_bytes(),
            b"WAVE",
            b"fmt ",
            &16u32.to_le_bytes(),
            &1u16.to_le_bytes(),
            &self.channels.to_le_bytes(),
            &self.sample_rate.to_le_bytes(),
            &self.byte_rate().to_le_bytes(),
            &self.block_align().to_le_bytes(),
            &self.bits_per_sample.to_le_bytes(),
            b"data",
            &data_len.to_le_bytes(),
        ];
        let mut pos = 0;
        for field in fields {
            header[pos..pos + field.len()].copy_from_slice(field);
            pos += field.len();
        }
        Ok(header)
    }
}

/// Builds a complete WAV file in memory.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> MelodyResult<Vec<u8>> {
    let header = format.header(pcm_data.len())?;
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&header);
    buffer.extend_from_slice(pcm_data);
    Ok(buffer)
}

/// Converts samples in [-1, 1] to little-endian 16-bit PCM, clipping outliers.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let pcm_value = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }
    pcm
}

/// Extracts the `data` chunk from a WAV file buffer.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < WAV_HEADER_LEN || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let size_bytes: [u8; 4] = wav_data[pos + 4..pos + 8].try_into().ok()?;
        let chunk_size = u32::from_le_bytes(size_bytes) as usize;

        if chunk_id == b"data" {
            let start = pos + 8;
            return wav_data.get(start..start + chunk_size);
        }

        pos += 8 + chunk_size + (chunk_size % 2);
    }

    None
}

/// BLAKE3 hash of PCM bytes.
pub fn hash_pcm(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// BLAKE3 hash of a WAV file's PCM payload.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(hash_pcm)
}

/// A rendered WAV file.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> MelodyResult<Self> {
        let pcm = samples_to_pcm16(samples);
        let wav_data = write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm)?;

        Ok(Self {
            wav_data,
            pcm_hash: hash_pcm(&pcm),
            sample_rate,
            num_samples: samples.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
