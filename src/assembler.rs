//!# RX assembler
//! Accumulates arbitrarily chunked serial input and extracts every complete frame.
//! Corrupted or misaligned input is skipped byte by byte until the next valid header.
//!
//! The buffer never grows beyond its capacity: if a chunk does not fit, all
//! buffered bytes are **discarded** before the chunk is appended. Any partially received
//! frame is lost in that case.
//!
//! ```
//!# use uart_can_bridge::assembler::RxAssembler;
//!# use embedded_can::Frame;
//!#
//! let mut assembler = RxAssembler::new(256);
//!
//! // Leading noise is skipped, frame is split over two chunks
//! assert!(assembler.feed(&[0xFF, 0xFF, 0xAA, 0x00]).is_empty());
//! let frames = assembler.feed(&[0x01, 0x02, 0x10, 0x20]);
//!
//! assert_eq!(1, frames.len());
//! assert_eq!(&[0x10, 0x20], frames[0].data());
//! assert_eq!(0, assembler.pending());
//! ```
use crate::codec::{decode, Decoded, ResyncCause};
use crate::frame::CanFrame;
use alloc::vec::Vec;
use bytes::{Buf, BytesMut};
use log::{debug, warn};

/// Default RX buffer capacity in bytes
pub const DEFAULT_RX_CAPACITY: usize = 256;

/// Counters collected while assembling frames
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct RxStatistics {
    /// Successfully decoded frames
    pub frames: usize,
    /// Bytes skipped for resynchronization
    pub resyncs: usize,
    /// Number of buffer resets due to overflow
    pub overflows: usize,
    /// Bytes dropped by buffer resets
    pub discarded_bytes: usize,
}

/// Bounded byte accumulator and resynchronizing frame parser
#[derive(Debug)]
pub struct RxAssembler {
    /// Unconsumed input in arrival order
    buffer: BytesMut,

    /// Max. number of buffered bytes
    capacity: usize,

    statistics: RxStatistics,
}

impl RxAssembler {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            capacity,
            statistics: RxStatistics::default(),
        }
    }

    /// Appends the chunk and returns all frames which could be extracted.
    /// Incomplete trailing bytes are retained for the next call.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<CanFrame> {
        self.append(chunk);

        let mut frames = Vec::new();

        // Every iteration either yields a frame or drops at least one byte
        loop {
            match decode(&self.buffer, 0) {
                Decoded::Incomplete => break,
                Decoded::Resync(cause) => {
                    match cause {
                        ResyncCause::MissingSync(byte) => debug!("Wrong start byte 0x{byte:02x}, skipping one byte"),
                        ResyncCause::InvalidLength(dlc) => debug!("Invalid DLC value {dlc}, skipping one byte"),
                    }

                    self.buffer.advance(1);
                    self.statistics.resyncs += 1;
                }
                Decoded::Frame { frame, consumed } => {
                    self.buffer.advance(consumed);
                    self.statistics.frames += 1;
                    frames.push(frame);
                }
            }
        }

        frames
    }

    /// Number of buffered bytes not yet consumed by a frame
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Buffered bytes not yet consumed by a frame
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn statistics(&self) -> RxStatistics {
        self.statistics
    }

    /// Drops all buffered bytes
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Copies the chunk into the buffer, resetting the buffer on overflow
    fn append(&mut self, chunk: &[u8]) {
        if self.buffer.len() + chunk.len() > self.capacity {
            warn!(
                "RX buffer overflow, discarding {} buffered bytes ({} new bytes, capacity {})",
                self.buffer.len(),
                chunk.len(),
                self.capacity
            );

            self.statistics.overflows += 1;
            self.statistics.discarded_bytes += self.buffer.len();
            self.buffer.clear();
        }

        // Chunk alone exceeds the capacity, only its tail is kept
        let skip = chunk.len().saturating_sub(self.capacity);
        if skip > 0 {
            warn!("RX chunk of {} bytes exceeds capacity, dropping {skip} leading bytes", chunk.len());
            self.statistics.discarded_bytes += skip;
        }

        self.buffer.extend_from_slice(&chunk[skip..]);
    }
}

impl Default for RxAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_RX_CAPACITY)
    }
}
