//! Time-ordered merge across all selected locations.
//!
//! Every local reader is switched into operated mode and primed once; the
//! readers then live in a binary min-heap keyed by
//! `(staged event time, location id)`. Delivering the root's staged event
//! and refilling it keeps at most one event per location in flight, which
//! preserves file order within a location and gives a deterministic
//! total order across locations.

use log::debug;

use crate::callbacks::{CallbackControl, GlobalEventContext, GlobalReaderCallbacks};
use crate::chunk_stream::ChunkStream;
use crate::dispatch::deliver_event;
use crate::error::{Error, Result};
use crate::event_reader::EventReader;
use crate::location::LocationContext;

pub struct GlobalEventReader<S, L, U, RU = ()> {
    readers: Vec<EventReader<S, L, RU>>,
    callbacks: GlobalReaderCallbacks<U>,
    user_data: U,
}

impl<S: ChunkStream, L: LocationContext, U, RU> GlobalEventReader<S, L, U, RU> {
    /// Primes every reader with its first event. Locations without any
    /// events are retired right away; any other priming failure is
    /// surfaced.
    pub fn new(
        readers: Vec<EventReader<S, L, RU>>,
        callbacks: GlobalReaderCallbacks<U>,
        user_data: U,
    ) -> Result<GlobalEventReader<S, L, U, RU>> {
        let mut queue = Vec::with_capacity(readers.len());
        for mut reader in readers {
            reader.set_operated_by_global_reader();
            match reader.read_next() {
                Ok(()) => queue.push(reader),
                Err(Error::IndexOutOfBounds) => {
                    debug!("location {} has no events, retiring", reader.location());
                }
                Err(error) => return Err(error),
            }
        }

        let mut reader = GlobalEventReader {
            readers: queue,
            callbacks,
            user_data,
        };
        for node in (0..reader.readers.len()).rev() {
            reader.percolate_down(node);
        }
        Ok(reader)
    }

    pub fn has_event(&self) -> bool {
        !self.readers.is_empty()
    }

    pub fn user_data(&self) -> &U {
        &self.user_data
    }

    /// Consumes the reader and hands back the callback user data.
    pub fn into_user_data(self) -> U {
        self.user_data
    }

    /// Delivers the globally next event, if any, and refills the heap.
    /// An error while refilling overrides a callback interrupt.
    pub fn read_event(&mut self) -> Result<()> {
        if self.readers.is_empty() {
            return Ok(());
        }

        let control = {
            let reader = &self.readers[0];
            let context = GlobalEventContext {
                location: reader.location(),
                time: reader.current_time(),
            };
            deliver_event(
                &self.callbacks,
                &mut self.user_data,
                context,
                reader.attribute_list(),
                reader.current_event(),
                reader.location_context(),
            )
        };
        // The staged attribute list belonged to the event just delivered.
        self.readers[0].clear_attribute_list();
        let interrupted = control == CallbackControl::Interrupt;

        match self.readers[0].read_next() {
            Ok(()) => self.percolate_down(0),
            Err(Error::IndexOutOfBounds) => {
                let retired = self.readers.swap_remove(0);
                debug!("location {} exhausted, retiring", retired.location());
                if !self.readers.is_empty() {
                    self.percolate_down(0);
                }
            }
            Err(error) => return Err(error),
        }

        if interrupted {
            Err(Error::InterruptedByCallback)
        } else {
            Ok(())
        }
    }

    /// Reads up to `records_to_read` events in global order. Returns the
    /// number of delivered events; an interrupting event is counted.
    pub fn read_events(&mut self, records_to_read: u64) -> (u64, Result<()>) {
        let mut read = 0;
        while read < records_to_read {
            if !self.has_event() {
                return (read, Ok(()));
            }
            match self.read_event() {
                Ok(()) => read += 1,
                Err(Error::InterruptedByCallback) => {
                    read += 1;
                    return (read, Err(Error::InterruptedByCallback));
                }
                Err(error) => return (read, Err(error)),
            }
        }
        (read, Ok(()))
    }

    fn reader_is_less(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.readers[a], &self.readers[b]);
        // equal timestamps break ties by location id, which makes the
        // delivery order reproducible
        (a.current_time(), a.location()) < (b.current_time(), b.location())
    }

    fn percolate_down(&mut self, node: usize) {
        let count = self.readers.len();
        let mut node = node;
        loop {
            let mut smallest = node;

            let child = node * 2 + 1;
            if child < count && self.reader_is_less(child, smallest) {
                smallest = child;
            }
            let child = child + 1;
            if child < count && self.reader_is_less(child, smallest) {
                smallest = child;
            }

            if smallest == node {
                return;
            }
            self.readers.swap(node, smallest);
            node = smallest;
        }
    }
}
