use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

/// Background music looping forever on the default output device.
///
/// Playback stops when this value is dropped, so the host keeps it alive for the whole session.
pub struct MusicPlayer {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    _sink: Sink,
}

impl MusicPlayer {
    /// Opens the output device, decodes `path` and starts looping it at `volume` (0.0..=1.0).
    pub fn play_looped(path: impl AsRef<Path>, volume: f32) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("cannot open music file {}", path.display()))?;
        let source = Decoder::new(BufReader::new(file))
            .with_context(|| format!("cannot decode music file {}", path.display()))?;

        let (stream, handle) =
            OutputStream::try_default().context("no audio output device available")?;
        let sink = Sink::try_new(&handle).context("cannot create audio sink")?;
        sink.set_volume(volume.clamp(0.0, 1.0));
        sink.append(source.repeat_infinite());

        debug!("looping music from {}", path.display());
        Ok(Self {
            _stream: stream,
            _handle: handle,
            _sink: sink,
        })
    }
}
