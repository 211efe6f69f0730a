//! Owned singly-linked sensor list
//!
//! The list owns its nodes and each node owns its sensor. Moving a sensor
//! between lists unlinks its node from one list and links the same node
//! into another, so sensors are never copied.

use crate::sensor::Sensor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

type Link = Option<Box<Node>>;

pub(crate) struct Node {
    pub(crate) sensor: Sensor,
    next: Link,
}

impl Node {
    fn boxed(sensor: Sensor) -> Box<Self> {
        Box::new(Self { sensor, next: None })
    }
}

/// Ordered sequence of sensors with a length counter.
///
/// `len()` always equals the number of linked nodes.
#[derive(Default)]
pub struct SensorList {
    head: Link,
    len: usize,
}

impl SensorList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sensors in the list
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no sensor
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a sensor at the front.
    pub fn prepend(&mut self, sensor: Sensor) {
        let mut node = Node::boxed(sensor);
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    /// Insert a sensor at the back. Walks the list.
    pub fn append(&mut self, sensor: Sensor) {
        self.tail().push(Node::boxed(sensor));
    }

    /// Remove and return the front sensor
    pub fn pop_front(&mut self) -> Option<Sensor> {
        self.unlink_front().map(|node| node.sensor)
    }

    /// Front sensor, if any
    pub fn front(&self) -> Option<&Sensor> {
        self.head.as_deref().map(|node| &node.sensor)
    }

    /// Drop every sensor
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Iterate sensors front to back
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Iterate sensors front to back, mutably
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Detach the front node, leaving its sensor inside it.
    pub(crate) fn unlink_front(&mut self) -> Option<Box<Node>> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node
        })
    }

    /// Cursor positioned after the last node.
    pub(crate) fn tail(&mut self) -> Tail<'_> {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        Tail {
            slot: Some(slot),
            len: &mut self.len,
        }
    }
}

/// Appending cursor over the end of one list.
///
/// Holding a cursor per output list keeps each append O(1) while the
/// classifier drains its input.
pub(crate) struct Tail<'a> {
    slot: Option<&'a mut Link>,
    len: &'a mut usize,
}

impl Tail<'_> {
    /// Link a detached node at the end of the list.
    pub(crate) fn push(&mut self, node: Box<Node>) {
        debug_assert!(node.next.is_none());
        if let Some(slot) = self.slot.take() {
            let node = slot.insert(node);
            self.slot = Some(&mut node.next);
            *self.len += 1;
        }
    }
}

impl Drop for SensorList {
    fn drop(&mut self) {
        // Unlink iteratively so long lists do not recurse through Box drops
        self.clear();
    }
}

impl Clone for SensorList {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl PartialEq for SensorList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SensorList {}

impl fmt::Debug for SensorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<Sensor> for SensorList {
    fn extend<I: IntoIterator<Item = Sensor>>(&mut self, iter: I) {
        let mut tail = self.tail();
        for sensor in iter {
            tail.push(Node::boxed(sensor));
        }
    }
}

impl FromIterator<Sensor> for SensorList {
    fn from_iter<I: IntoIterator<Item = Sensor>>(iter: I) -> Self {
        let mut list = SensorList::new();
        list.extend(iter);
        list
    }
}

impl Serialize for SensorList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for SensorList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Sensor>::deserialize(deserializer).map(|sensors| sensors.into_iter().collect())
    }
}

/// Borrowing iterator over a [`SensorList`]
pub struct Iter<'a> {
    next: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Sensor;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.sensor
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Mutable iterator over a [`SensorList`]
pub struct IterMut<'a> {
    next: Option<&'a mut Node>,
    remaining: usize,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut Sensor;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.sensor
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IterMut<'_> {}

/// Owning iterator, draining from the front
pub struct IntoIter(SensorList);

impl Iterator for IntoIter {
    type Item = Sensor;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for SensorList {
    type Item = Sensor;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a> IntoIterator for &'a SensorList {
    type Item = &'a Sensor;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut SensorList {
    type Item = &'a mut Sensor;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
