//! 4K throughput and latency benchmarks
//!
//! Throughput is measured with a batch of small random files (1-4 KiB by
//! default) in a scratch directory under the measured path. Latency is the
//! time to read or write a single byte. All operations block.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, trace};

use super::config::BenchmarkConfig;
use super::scratch::ScratchPath;
pub use crate::utils::bytes_per_second;
use crate::utils::{ThroughputTally, TimedOperation};

/// Runs disk benchmarks against a filesystem location
#[derive(Debug, Clone, Default)]
pub struct DiskBenchmark {
    config: BenchmarkConfig,
}

impl DiskBenchmark {
    /// Create a benchmark runner with the given settings
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Random 4K write throughput under `path`, in bytes per second
    pub fn write_speed(&self, path: &Path) -> io::Result<u64> {
        let scratch = self.create_scratch_dir(path)?;

        let mut tally = ThroughputTally::default();
        for index in 0..self.config.batch_size {
            let (size, micros) = self.write_random_file(&scratch.bench_file(index))?;
            tally.record(size, micros);

            if self.config.seek_between_writes {
                // Result ignored: the read only exists to move the disk head.
                let _ = fs::read(scratch.bench_file(0));
            }
        }

        scratch.remove().map_err(|e| with_path(e, path))?;
        let speed = tally.bytes_per_second();
        debug!(
            path = %path.display(),
            bytes = tally.bytes(),
            micros = tally.micros(),
            speed,
            "Write speed measured"
        );
        Ok(speed)
    }

    /// Random 4K read throughput under `path`, in bytes per second
    ///
    /// Populates a private scratch directory, then times [`random_reads`]
    /// over it.
    pub fn read_speed(&self, path: &Path) -> io::Result<u64> {
        let scratch = self.create_scratch_dir(path)?;
        for index in 0..self.config.batch_size {
            self.write_random_file(&scratch.bench_file(index))?;
        }

        let files: Vec<PathBuf> = (0..self.config.batch_size)
            .map(|index| scratch.bench_file(index))
            .collect();
        let tally = random_reads(&files, self.config.batch_size)?;

        scratch.remove().map_err(|e| with_path(e, path))?;
        let speed = tally.bytes_per_second();
        debug!(
            path = %path.display(),
            reads = tally.samples(),
            bytes = tally.bytes(),
            micros = tally.micros(),
            speed,
            "Read speed measured"
        );
        Ok(speed)
    }

    /// First-byte read latency in microseconds
    ///
    /// Reads `path` itself when it is a file. For a directory, the first
    /// file reached by descending entries in directory order is used.
    pub fn read_delay_micros(&self, path: &Path) -> io::Result<u64> {
        let target = first_file(path)?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no readable file found", path.display()),
            )
        })?;

        let micros = time_first_byte_read(&target).map_err(|e| with_path(e, &target))?;
        debug!(path = %target.display(), micros, "Read delay measured");
        Ok(micros)
    }

    /// Single-byte write latency in microseconds
    ///
    /// Only the write itself is timed; creating and removing the probe file
    /// are not.
    pub fn write_delay_micros(&self, path: &Path) -> io::Result<u64> {
        let (probe, mut file) = ScratchPath::create_file_in(path, &self.config.probe_file_name)
            .map_err(|e| with_path(e, path))?;

        let timer = TimedOperation::start();
        file.write_all(&[0u8])?;
        let micros = timer.elapsed_micros();

        drop(file);
        probe.remove().map_err(|e| with_path(e, path))?;
        debug!(path = %path.display(), micros, "Write delay measured");
        Ok(micros)
    }

    fn create_scratch_dir(&self, path: &Path) -> io::Result<ScratchPath> {
        if !path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: not a directory", path.display()),
            ));
        }
        ScratchPath::create_dir_in(path, &self.config.scratch_dir_name)
            .map_err(|e| with_path(e, path))
    }

    /// Write a file of random size and content; returns (bytes, micros)
    fn write_random_file(&self, path: &Path) -> io::Result<(u64, u64)> {
        let mut rng = rand::rng();
        let size = self.random_file_size(&mut rng);
        let mut buffer = vec![0u8; usize::try_from(size).unwrap_or(usize::MAX)];
        rng.fill(buffer.as_mut_slice());

        let timer = TimedOperation::start();
        let mut file = fs::File::create(path).map_err(|e| with_path(e, path))?;
        file.write_all(&buffer).map_err(|e| with_path(e, path))?;
        let micros = timer.elapsed_micros();

        trace!(path = %path.display(), size, micros, "Benchmark file written");
        Ok((size, micros))
    }

    fn random_file_size(&self, rng: &mut impl Rng) -> u64 {
        let min = self.config.min_file_size;
        let max = self.config.max_file_size;
        if max <= min {
            return min;
        }
        rng.random_range(min..max)
    }
}

/// Time `reads` reads of files picked uniformly at random from `files`
///
/// Some files are read more than once and some never. Failed reads are
/// skipped, but a run in which no read succeeds is an error.
pub fn random_reads(files: &[PathBuf], reads: u32) -> io::Result<ThroughputTally> {
    if files.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no files to read",
        ));
    }

    let mut rng = rand::rng();
    let mut tally = ThroughputTally::default();
    let mut last_error = None;
    for _ in 0..reads {
        let file = &files[rng.random_range(0..files.len())];
        let timer = TimedOperation::start();
        match fs::read(file) {
            Ok(buffer) => tally.record(buffer.len() as u64, timer.elapsed_micros()),
            Err(e) => {
                trace!(path = %file.display(), error = %e, "Benchmark read failed");
                last_error = Some(with_path(e, file));
            }
        }
    }

    if tally.samples() == 0 {
        return Err(last_error.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "no reads requested")
        }));
    }
    Ok(tally)
}

fn first_file(path: &Path) -> io::Result<Option<PathBuf>> {
    if !path.is_dir() {
        return Ok(Some(path.to_path_buf()));
    }

    for entry in fs::read_dir(path).map_err(|e| with_path(e, path))? {
        let entry_path = entry?.path();
        if entry_path.is_dir() {
            if let Some(found) = first_file(&entry_path)? {
                return Ok(Some(found));
            }
        } else {
            return Ok(Some(entry_path));
        }
    }
    Ok(None)
}

fn time_first_byte_read(path: &Path) -> io::Result<u64> {
    let mut buffer = [0u8; 1];

    let timer = TimedOperation::start();
    let mut file = fs::File::open(path)?;
    // Empty files still count: the open is the dominant cost.
    let _ = file.read(&mut buffer)?;
    Ok(timer.elapsed_micros())
}

fn with_path(error: io::Error, path: &Path) -> io::Error {
    io::Error::new(error.kind(), format!("{}: {error}", path.display()))
}
