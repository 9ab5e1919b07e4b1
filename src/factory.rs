use crate::{Accumulator, Error, Result, Value, separated_by};
use std::{
    any::type_name,
    collections::{HashMap, HashSet},
    fmt::{self, Display, Write},
    hash::Hash,
    slice, vec,
};

/// Ordered, exclusively owned sequence of values of one type, with the
/// relational operations warehouse tooling keeps reaching for: duplicate
/// queries, index location, zipping parallel sequences into rows, mapping and
/// joining them into text.
///
/// Homogeneity is the type system's job: a `Factory<V>` can only ever hold
/// `V`s, and `update`/`map` cannot break that. Runtime-typed data goes through
/// [`Factory::homogeneous`], which checks that every [`Value`] is of one kind.
///
/// Chained zips grow rows at the type level: `Factory<V>` zips to
/// `Factory<(V, W)>`, which zips to `Factory<((V, W), X)>`, and pattern
/// matching flattens the row at the use site. Consuming operations (`map`,
/// `zip`) take `self` and hand back the transformed factory; the `_ref`
/// variants leave the original untouched and return an independently owned
/// one. Nothing here is safe for concurrent mutation without external locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Factory<V> {
    elements: Vec<V>,
}

impl<V> Factory<V> {
    pub fn new(source: impl IntoIterator<Item = V>) -> Self {
        Self {
            elements: source.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&V> {
        self.elements.get(index)
    }

    /// Static element type, or `"empty"` for a factory with no elements.
    pub fn element_type(&self) -> &'static str {
        if self.elements.is_empty() {
            "empty"
        } else {
            type_name::<V>()
        }
    }

    /// Replaces the element at `index`, keeping its type.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index >= len()`, leaving
    /// the sequence unchanged.
    pub fn update(&mut self, index: usize, value: V) -> Result<()> {
        let length = self.elements.len();
        if index >= length {
            return Err(Error::IndexOutOfRange { index, length });
        }
        self.elements[index] = value;
        Ok(())
    }

    /// Transforms every element in order, consuming the factory.
    pub fn map<R>(self, f: impl FnMut(V) -> R) -> Factory<R> {
        Factory {
            elements: self.elements.into_iter().map(f).collect(),
        }
    }

    /// Transforms every element in order, leaving this factory untouched.
    pub fn map_ref<R>(&self, f: impl FnMut(&V) -> R) -> Factory<R> {
        Factory {
            elements: self.elements.iter().map(f).collect(),
        }
    }

    /// Pairs each element with the one at the same index in `other`.
    ///
    /// Fails with [`Error::LengthMismatch`] when the lengths differ. Applied
    /// to an already zipped factory this widens the row by one position:
    /// `Factory<(A, B)>` becomes `Factory<((A, B), C)>`.
    pub fn zip<W>(self, other: impl IntoIterator<Item = W>) -> Result<Factory<(V, W)>> {
        let other: Vec<W> = other.into_iter().collect();
        if other.len() != self.elements.len() {
            return Err(Error::LengthMismatch {
                left: self.elements.len(),
                right: other.len(),
            });
        }
        Ok(Factory {
            elements: self.elements.into_iter().zip(other).collect(),
        })
    }

    /// Like [`zip`](Factory::zip) but cloning, leaving this factory untouched.
    pub fn zip_ref<W>(&self, other: impl IntoIterator<Item = W>) -> Result<Factory<(V, W)>>
    where
        V: Clone,
    {
        let other: Vec<W> = other.into_iter().collect();
        if other.len() != self.elements.len() {
            return Err(Error::LengthMismatch {
                left: self.elements.len(),
                right: other.len(),
            });
        }
        Ok(Factory {
            elements: self.elements.iter().cloned().zip(other).collect(),
        })
    }

    /// All indices holding `value`, in ascending order.
    pub fn locate(&self, value: &V) -> Vec<usize>
    where
        V: PartialEq,
    {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, v)| *v == value)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether some value occurs more than once.
    pub fn contains_duplicates(&self) -> bool
    where
        V: Eq + Hash,
    {
        let mut seen = HashSet::with_capacity(self.elements.len());
        self.elements.iter().any(|v| !seen.insert(v))
    }

    /// Values occurring more than once, each reported once, in the order the
    /// value was first seen. That ordering is part of the contract.
    pub fn duplicate_values(&self) -> Vec<V>
    where
        V: Eq + Hash + Clone,
    {
        let mut counts: HashMap<&V, usize> = HashMap::with_capacity(self.elements.len());
        for v in &self.elements {
            *counts.entry(v).or_default() += 1;
        }
        let mut reported = HashSet::new();
        self.elements
            .iter()
            .filter(|v| counts[*v] > 1 && reported.insert(*v))
            .cloned()
            .collect()
    }

    /// Text form of each element, with `delimiter` between consecutive ones.
    pub fn join(&self, delimiter: &str) -> String
    where
        V: Display,
    {
        let mut out = String::new();
        separated_by(
            &mut out,
            &self.elements,
            |out, v| {
                let _ = write!(out, "{}", v);
            },
            delimiter,
        );
        out
    }

    /// Human-readable listing: one `<index>|\t<value>` line per element,
    /// followed by a summary of length and element type.
    pub fn render(&self) -> String
    where
        V: Display,
    {
        let mut acc = Accumulator::new(-1, 1);
        let mut out = String::from("index\tvalue\n");
        for v in &self.elements {
            let mut buffer = itoa::Buffer::new();
            out.push_str(buffer.format(acc.advance()));
            out.push_str("|\t");
            let _ = writeln!(out, "{}", v);
        }
        let _ = write!(
            out,
            "length: {}\nelement type: {}",
            self.elements.len(),
            self.element_type()
        );
        out
    }

    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.elements.iter()
    }

    /// Snapshot copy of the current elements.
    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.elements.clone()
    }

    pub fn into_vec(self) -> Vec<V> {
        self.elements
    }

    /// Deduplicated, unordered copy of the current elements.
    pub fn to_set(&self) -> HashSet<V>
    where
        V: Eq + Hash + Clone,
    {
        self.elements.iter().cloned().collect()
    }
}

impl Factory<Value> {
    /// Builds a factory over runtime-typed values, enforcing that all of them
    /// are of one kind. An empty source is always valid.
    ///
    /// Fails with [`Error::ElemTypeMismatch`] naming every distinct kind
    /// observed, in first-seen order.
    pub fn homogeneous(source: impl IntoIterator<Item = Value>) -> Result<Self> {
        let factory = Self::new(source);
        factory.revalidate()?;
        Ok(factory)
    }

    /// Re-runs the homogeneity check on the current elements.
    pub fn revalidate(&self) -> Result<()> {
        let mut distinct: Vec<&Value> = Vec::new();
        for v in &self.elements {
            if !distinct.iter().any(|seen| seen.same_kind(v)) {
                distinct.push(v);
            }
        }
        if distinct.len() > 1 {
            return Err(Error::ElemTypeMismatch {
                kinds: distinct.iter().map(|v| v.kind().to_string()).collect(),
            });
        }
        Ok(())
    }

    /// Kind of the first element, or `"empty"`.
    pub fn element_kind(&self) -> &'static str {
        self.elements.first().map_or("empty", Value::kind)
    }
}

impl<V> FromIterator<V> for Factory<V> {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<V> IntoIterator for Factory<V> {
    type Item = V;
    type IntoIter = vec::IntoIter<V>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Factory<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<V: Display> Display for Factory<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
