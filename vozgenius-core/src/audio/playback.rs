//! Local playback of generated speech using cpal
//! Resamples from the buffer rate to the native device rate if needed

use anyhow::{Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{
    Device, FromSample, SampleFormat, SizedSample, Stream, StreamConfig, SupportedStreamConfig,
};
use rubato::{FftFixedIn, Resampler};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use super::pcm::SampleBuffer;

const RESAMPLE_CHUNK: usize = 1024;

/// Plays sample buffers on the default output device
pub struct AudioPlayer {
    device: Device,
    supported_config: SupportedStreamConfig,
}

/// Playback handle - dropping stops playback
pub struct AudioPlayback {
    _stream: Stream,
    finished: Arc<AtomicBool>,
}

impl AudioPlayback {
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    /// Wait for playback to complete
    pub async fn wait(&self) {
        while !self.is_finished() {
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }
    }
}

impl AudioPlayer {
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .context("no output device available")?;

        let supported_config = device
            .default_output_config()
            .context("failed to get default output config")?;

        Ok(Self {
            device,
            supported_config,
        })
    }

    /// Start playing the first channel of `buffer` on every device channel
    pub fn play(&self, buffer: &SampleBuffer) -> Result<AudioPlayback> {
        let native_rate = self.supported_config.sample_rate().0;
        let native_channels = self.supported_config.channels() as usize;
        let sample_format = self.supported_config.sample_format();
        let config: StreamConfig = self.supported_config.clone().into();

        let source = buffer.channel(0).unwrap_or_default();
        let resampled = if buffer.sample_rate() == native_rate {
            source.to_vec()
        } else {
            resample(source, buffer.sample_rate(), native_rate)?
        };

        tracing::debug!(
            source_rate = buffer.sample_rate(),
            native_rate,
            native_channels,
            frames = resampled.len(),
            "Starting playback"
        );

        let samples = Arc::new(expand_to_channels(&resampled, native_channels));
        let position = Arc::new(AtomicUsize::new(0));
        let finished = Arc::new(AtomicBool::new(false));

        let stream = match sample_format {
            SampleFormat::F32 => {
                self.build_stream::<f32>(&config, samples, position, finished.clone())?
            }
            SampleFormat::I16 => {
                self.build_stream::<i16>(&config, samples, position, finished.clone())?
            }
            format => anyhow::bail!("unsupported sample format: {:?}", format),
        };

        stream.play().context("failed to start playback stream")?;

        Ok(AudioPlayback {
            _stream: stream,
            finished,
        })
    }

    fn build_stream<T>(
        &self,
        config: &StreamConfig,
        samples: Arc<Vec<f32>>,
        position: Arc<AtomicUsize>,
        finished: Arc<AtomicBool>,
    ) -> Result<Stream>
    where
        T: SizedSample + FromSample<f32> + Default + Send + 'static,
    {
        self.device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let pos = position.load(Ordering::SeqCst);
                    let remaining = samples.len().saturating_sub(pos);

                    if remaining == 0 {
                        data.fill(T::default());
                        finished.store(true, Ordering::SeqCst);
                        return;
                    }

                    let to_copy = remaining.min(data.len());
                    for (out, &sample) in data.iter_mut().zip(&samples[pos..pos + to_copy]) {
                        *out = T::from_sample(sample);
                    }
                    if to_copy < data.len() {
                        data[to_copy..].fill(T::default());
                    }

                    position.store(pos + to_copy, Ordering::SeqCst);
                },
                move |err| {
                    tracing::error!(error = ?err, "playback stream error");
                },
                None,
            )
            .context("failed to build output stream")
    }
}

fn resample(samples: &[f32], source_rate: u32, target_rate: u32) -> Result<Vec<f32>> {
    let mut resampler = FftFixedIn::<f32>::new(
        source_rate as usize,
        target_rate as usize,
        RESAMPLE_CHUNK,
        2,
        1,
    )
    .context("failed to create resampler")?;

    let mut output = Vec::new();
    let mut pos = 0;

    while pos < samples.len() {
        let frames_needed = resampler.input_frames_next();
        let end = (pos + frames_needed).min(samples.len());

        let mut input_chunk = samples[pos..end].to_vec();
        input_chunk.resize(frames_needed, 0.0);

        let input = vec![input_chunk];
        let resampled = resampler
            .process(&input, None)
            .map_err(|e| anyhow::anyhow!("resampling failed: {e:?}"))?;
        if let Some(chunk) = resampled.into_iter().next() {
            output.extend(chunk);
        }

        pos = end;
    }

    Ok(output)
}

fn expand_to_channels(samples: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }
    samples
        .iter()
        .flat_map(|&sample| std::iter::repeat(sample).take(channels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_to_channels() {
        assert_eq!(
            expand_to_channels(&[0.1, -0.2], 3),
            vec![0.1, 0.1, 0.1, -0.2, -0.2, -0.2]
        );
        assert_eq!(expand_to_channels(&[0.5], 1), vec![0.5]);
    }

    #[test]
    fn test_resample_doubles_length() {
        let samples = vec![0.0f32; 4800];
        let out = resample(&samples, 24_000, 48_000).unwrap();
        assert!(out.len() >= 9600);
    }
}
