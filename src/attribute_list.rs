//! The ordered key-value list a producer can prefix to any event.
//!
//! Each reader owns one list. An `AttributeList` record on the wire
//! fills it, the following event's callback borrows it, and it is
//! cleared before the next event, so consumers must copy out what they
//! want to keep. Nodes come from the per-thread small-object layer, so
//! refilling the list on every other event stays cheap.

use std::marker::PhantomData;
use std::ptr::NonNull;

use num_traits::FromPrimitive;

use crate::attribute_value::{AttributeValue, Type};
use crate::chunk_stream::ChunkStream;
use crate::error::{Error, Result};
use crate::location::MappingKind;
use crate::memory::{memory_allocate, memory_deallocate};
use crate::types::AttributeRef;

struct AttributeNode {
    id: AttributeRef,
    value: AttributeValue,
    next: *mut AttributeNode,
}

pub struct AttributeList {
    head: *mut AttributeNode,
    tail: *mut AttributeNode,
    len: usize,
}

impl AttributeList {
    pub fn new() -> AttributeList {
        AttributeList {
            head: std::ptr::null_mut(),
            tail: std::ptr::null_mut(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends an attribute, keeping insertion order.
    pub fn add(&mut self, id: AttributeRef, value: AttributeValue) -> Result<()> {
        let raw = memory_allocate(std::mem::size_of::<AttributeNode>())?;
        let node = raw.as_ptr() as *mut AttributeNode;
        unsafe {
            node.write(AttributeNode {
                id,
                value,
                next: std::ptr::null_mut(),
            });
            if self.tail.is_null() {
                self.head = node;
            } else {
                (*self.tail).next = node;
            }
        }
        self.tail = node;
        self.len += 1;
        Ok(())
    }

    pub fn remove_all(&mut self) {
        let mut node = self.head;
        while !node.is_null() {
            unsafe {
                let next = (*node).next;
                node.drop_in_place();
                memory_deallocate(
                    NonNull::new_unchecked(node as *mut u8),
                    std::mem::size_of::<AttributeNode>(),
                );
                node = next;
            }
        }
        self.head = std::ptr::null_mut();
        self.tail = std::ptr::null_mut();
        self.len = 0;
    }

    pub fn get(&self, id: AttributeRef) -> Option<&AttributeValue> {
        self.iter()
            .find(|(node_id, _)| *node_id == id)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> AttributeListIter<'_> {
        AttributeListIter {
            node: self.head,
            _list: PhantomData,
        }
    }

    /// Decodes an `AttributeList` record's payload. The record is
    /// length-framed; trailing bytes beyond the known element layout are
    /// stepped over. Reference values are rewritten through `map`.
    pub(crate) fn read_from_stream<S, F>(&mut self, stream: &mut S, mut map: F) -> Result<()>
    where
        S: ChunkStream,
        F: FnMut(MappingKind, u32) -> u32,
    {
        let record_length = stream.guarantee_record()?;
        let record_end = stream.position().advanced(record_length);

        let count = stream.read_u32()?;
        for _ in 0..count {
            let id = stream.read_u32()?;
            let type_tag = stream.read_u8()?;
            let type_tag = Type::from_u8(type_tag).ok_or(Error::ProcessedWithFaults)?;
            let value = read_value(stream, type_tag, &mut map)?;
            self.add(id, value)?;
        }

        stream.set_position(record_end)
    }
}

fn read_value<S, F>(stream: &mut S, type_tag: Type, map: &mut F) -> Result<AttributeValue>
where
    S: ChunkStream,
    F: FnMut(MappingKind, u32) -> u32,
{
    let value = match type_tag {
        Type::Uint8 => AttributeValue::Uint8(stream.read_u8()?),
        Type::Uint16 => AttributeValue::Uint16(stream.read_u32()? as u16),
        Type::Uint32 => AttributeValue::Uint32(stream.read_u32()?),
        Type::Uint64 => AttributeValue::Uint64(stream.read_u64()?),
        Type::Int8 => AttributeValue::Int8(stream.read_u8()? as i8),
        Type::Int16 => AttributeValue::Int16(stream.read_u32()? as u16 as i16),
        Type::Int32 => AttributeValue::Int32(stream.read_u32()? as i32),
        Type::Int64 => AttributeValue::Int64(stream.read_i64()?),
        Type::Float => AttributeValue::Float(stream.read_f32()?),
        Type::Double => AttributeValue::Double(stream.read_f64()?),
        Type::Attribute => AttributeValue::Attribute(stream.read_u32()?),
        Type::Location => AttributeValue::Location(stream.read_u32()?),
        reference => {
            let raw = stream.read_u32()?;
            let id = match AttributeValue::mapping_kind(reference) {
                Some(kind) => map(kind, raw),
                None => raw,
            };
            match reference {
                Type::String => AttributeValue::String(id),
                Type::Region => AttributeValue::Region(id),
                Type::Group => AttributeValue::Group(id),
                Type::Metric => AttributeValue::Metric(id),
                Type::Comm => AttributeValue::Comm(id),
                Type::Parameter => AttributeValue::Parameter(id),
                Type::RmaWin => AttributeValue::RmaWin(id),
                Type::IoHandle => AttributeValue::IoHandle(id),
                _ => unreachable!("non-reference types handled above"),
            }
        }
    };
    Ok(value)
}

impl Default for AttributeList {
    fn default() -> Self {
        AttributeList::new()
    }
}

impl Drop for AttributeList {
    fn drop(&mut self) {
        self.remove_all();
    }
}

pub struct AttributeListIter<'a> {
    node: *const AttributeNode,
    _list: PhantomData<&'a AttributeList>,
}

impl<'a> Iterator for AttributeListIter<'a> {
    type Item = (AttributeRef, &'a AttributeValue);

    fn next(&mut self) -> Option<Self::Item> {
        if self.node.is_null() {
            return None;
        }
        unsafe {
            let node = &*self.node;
            self.node = node.next;
            Some((node.id, &node.value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut list = AttributeList::new();
        list.add(3, AttributeValue::Uint32(30)).unwrap();
        list.add(1, AttributeValue::Uint32(10)).unwrap();
        list.add(2, AttributeValue::String(7)).unwrap();

        let ids: Vec<AttributeRef> = list.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, [3, 1, 2]);
        assert_eq!(list.get(1), Some(&AttributeValue::Uint32(10)));
        assert_eq!(list.get(9), None);
    }

    #[test]
    fn remove_all_resets_and_allows_reuse() {
        let mut list = AttributeList::new();
        for round in 0..4u64 {
            for id in 0..16u32 {
                list.add(id, AttributeValue::Uint64(u64::from(id) * round))
                    .unwrap();
            }
            assert_eq!(list.len(), 16);
            list.remove_all();
            assert!(list.is_empty());
            assert_eq!(list.iter().count(), 0);
        }
    }
}
