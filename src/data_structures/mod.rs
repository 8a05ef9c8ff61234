pub mod pairing_heap;

pub use pairing_heap::{HeapHandle, PairingHeap};
