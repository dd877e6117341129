//! Typed column collectors.
//!
//! A collector owns a fixed-size buffer of typed slots. It is resized to the number of
//! expected values, then each slot is set from a token by explicit index, and finally the
//! buffer is converted into a [`Column`].

// std imports
use std::mem::take;

// third-party imports
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

// local imports
use crate::{
    error::{Error, Result},
    number,
    stream::Stream,
    token::{Token, mismatch},
    types::Locale,
};

// ---

/// Kind of a collector and of the values it produces.
#[derive(
    ValueEnum,
    AsRefStr,
    Display,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Serialize,
    Eq,
    Hash,
    PartialEq,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CollectorSpec {
    #[default]
    Double,
    Integer,
    Logical,
    Character,
    Numeric,
    Skip,
}

// ---

/// Values produced by a collector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Column {
    Double(Vec<f64>),
    Integer(Vec<i64>),
    Logical(Vec<bool>),
    Character(Vec<String>),
    Skip,
}

impl Column {
    pub fn spec(&self) -> CollectorSpec {
        match self {
            Self::Double(_) => CollectorSpec::Double,
            Self::Integer(_) => CollectorSpec::Integer,
            Self::Logical(_) => CollectorSpec::Logical,
            Self::Character(_) => CollectorSpec::Character,
            Self::Skip => CollectorSpec::Skip,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Double(values) => values.len(),
            Self::Integer(values) => values.len(),
            Self::Logical(values) => values.len(),
            Self::Character(values) => values.len(),
            Self::Skip => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the values as strings, one per slot.
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Self::Double(values) => values.iter().map(|v| v.to_string()).collect(),
            Self::Integer(values) => values.iter().map(|v| v.to_string()).collect(),
            Self::Logical(values) => values.iter().map(|v| v.to_string()).collect(),
            Self::Character(values) => values.clone(),
            Self::Skip => Vec::new(),
        }
    }
}

// ---

/// Accumulates typed values converted from tokens.
pub trait Collector {
    /// Returns the kind of values this collector produces.
    fn spec(&self) -> CollectorSpec;

    /// Returns the current number of slots.
    fn size(&self) -> usize;

    /// Sets the number of slots, new slots hold the default value and slots past `n` are dropped.
    fn resize(&mut self, n: usize);

    /// Reserves room for at least `additional` more slots without changing the size.
    fn reserve(&mut self, additional: usize);

    /// Converts the token and stores it in the slot at `index`.
    ///
    /// Fails if `index` is out of range or the token cannot be converted,
    /// leaving the buffer unchanged in both cases.
    fn set_value(&mut self, index: usize, token: Token, stream: &dyn Stream) -> Result<()>;

    /// Returns true if this collector discards its values.
    fn skip(&self) -> bool {
        false
    }

    /// Converts the collected values into a column.
    fn into_column(self: Box<Self>) -> Column;
}

/// Creates a collector for the given spec.
pub fn create(spec: CollectorSpec, locale: &Locale) -> Box<dyn Collector> {
    match spec {
        CollectorSpec::Double => Box::new(DoubleCollector::with_locale(*locale)),
        CollectorSpec::Integer => Box::new(IntegerCollector::new()),
        CollectorSpec::Logical => Box::new(LogicalCollector::new()),
        CollectorSpec::Character => Box::new(CharacterCollector::new()),
        CollectorSpec::Numeric => Box::new(NumericCollector::with_locale(*locale)),
        CollectorSpec::Skip => Box::new(SkipCollector::new()),
    }
}

/// Resizes all collectors to `n` slots.
pub fn resize_all(collectors: &mut [Box<dyn Collector>], n: usize) {
    for collector in collectors {
        collector.resize(n);
    }
}

/// Guesses the most specific spec able to hold every value.
///
/// Empty values are ignored. If there are no other values, the guess is logical.
pub fn guess<'a, I>(values: I, locale: &Locale) -> CollectorSpec
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let values: Vec<_> = values.into_iter().filter(|v| !v.is_empty()).collect();

    if all(&values, |v| number::parse_bool(v).is_some()) {
        CollectorSpec::Logical
    } else if all(&values, |v| number::parse_i64(v).is_some()) {
        CollectorSpec::Integer
    } else if all(&values, |v| number::parse_f64(v, locale).is_some()) {
        CollectorSpec::Double
    } else if all(&values, |v| number::parse_grouped_f64(v, locale).is_some()) {
        CollectorSpec::Numeric
    } else {
        CollectorSpec::Character
    }
}

fn all(values: &[&[u8]], f: impl Fn(&[u8]) -> bool) -> bool {
    values.iter().all(|v| f(v))
}

// ---

/// Fixed-size buffer of slots with checked writes.
#[derive(Debug, Clone, Default, PartialEq)]
struct Slots<T> {
    values: Vec<T>,
}

impl<T: Clone + Default> Slots<T> {
    fn resize(&mut self, n: usize) {
        if n != self.values.len() {
            log::debug!("resizing collector from {} to {} slots", self.values.len(), n);
            self.values.resize(n, T::default());
        }
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        self.values.reserve(additional);
    }

    #[inline]
    fn check(&self, index: usize) -> Result<()> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                size: self.values.len(),
            })
        }
    }

    fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check(index)?;
        self.values[index] = value;
        Ok(())
    }
}

macro_rules! delegate_slots {
    () => {
        #[inline]
        fn size(&self) -> usize {
            self.slots.values.len()
        }

        #[inline]
        fn resize(&mut self, n: usize) {
            self.slots.resize(n)
        }

        #[inline]
        fn reserve(&mut self, additional: usize) {
            self.slots.reserve(additional)
        }
    };
}

// ---

/// Collects floating point numbers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoubleCollector {
    slots: Slots<f64>,
    locale: Locale,
}

impl DoubleCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            slots: Slots::default(),
            locale,
        }
    }

    /// Returns the collected values.
    #[inline]
    pub fn vector(&self) -> &[f64] {
        &self.slots.values
    }

    /// Converts the collector into the collected values.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.slots.values
    }
}

impl Collector for DoubleCollector {
    delegate_slots!();

    #[inline]
    fn spec(&self) -> CollectorSpec {
        CollectorSpec::Double
    }

    fn set_value(&mut self, index: usize, token: Token, stream: &dyn Stream) -> Result<()> {
        self.slots.check(index)?;
        let value = token.to_f64(stream, &self.locale)?;
        self.slots.set(index, value)
    }

    fn into_column(mut self: Box<Self>) -> Column {
        Column::Double(take(&mut self.slots.values))
    }
}

// ---

/// Collects numbers written with grouping marks, such as `1,234.5`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericCollector {
    slots: Slots<f64>,
    locale: Locale,
}

impl NumericCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            slots: Slots::default(),
            locale,
        }
    }
}

impl Collector for NumericCollector {
    delegate_slots!();

    #[inline]
    fn spec(&self) -> CollectorSpec {
        CollectorSpec::Numeric
    }

    fn set_value(&mut self, index: usize, token: Token, stream: &dyn Stream) -> Result<()> {
        self.slots.check(index)?;
        let text = token.as_bytes(stream)?;
        let value = number::parse_grouped_f64(text, &self.locale).ok_or_else(|| mismatch(text, self.spec()))?;
        self.slots.set(index, value)
    }

    fn into_column(mut self: Box<Self>) -> Column {
        Column::Double(take(&mut self.slots.values))
    }
}

// ---

/// Collects 64-bit signed integers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegerCollector {
    slots: Slots<i64>,
}

impl IntegerCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collector for IntegerCollector {
    delegate_slots!();

    #[inline]
    fn spec(&self) -> CollectorSpec {
        CollectorSpec::Integer
    }

    fn set_value(&mut self, index: usize, token: Token, stream: &dyn Stream) -> Result<()> {
        self.slots.check(index)?;
        let text = token.as_bytes(stream)?;
        let value = number::parse_i64(text).ok_or_else(|| mismatch(text, self.spec()))?;
        self.slots.set(index, value)
    }

    fn into_column(mut self: Box<Self>) -> Column {
        Column::Integer(take(&mut self.slots.values))
    }
}

// ---

/// Collects booleans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogicalCollector {
    slots: Slots<bool>,
}

impl LogicalCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collector for LogicalCollector {
    delegate_slots!();

    #[inline]
    fn spec(&self) -> CollectorSpec {
        CollectorSpec::Logical
    }

    fn set_value(&mut self, index: usize, token: Token, stream: &dyn Stream) -> Result<()> {
        self.slots.check(index)?;
        let text = token.as_bytes(stream)?;
        let value = number::parse_bool(text).ok_or_else(|| mismatch(text, self.spec()))?;
        self.slots.set(index, value)
    }

    fn into_column(mut self: Box<Self>) -> Column {
        Column::Logical(take(&mut self.slots.values))
    }
}

// ---

/// Collects the text of the tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterCollector {
    slots: Slots<String>,
}

impl CharacterCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collector for CharacterCollector {
    delegate_slots!();

    #[inline]
    fn spec(&self) -> CollectorSpec {
        CollectorSpec::Character
    }

    fn set_value(&mut self, index: usize, token: Token, stream: &dyn Stream) -> Result<()> {
        self.slots.check(index)?;
        let value = token.as_str(stream)?.into_owned();
        self.slots.set(index, value)
    }

    fn into_column(mut self: Box<Self>) -> Column {
        Column::Character(take(&mut self.slots.values))
    }
}

// ---

/// Discards all values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkipCollector {
    size: usize,
}

impl SkipCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collector for SkipCollector {
    #[inline]
    fn spec(&self) -> CollectorSpec {
        CollectorSpec::Skip
    }

    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn resize(&mut self, n: usize) {
        self.size = n;
    }

    #[inline]
    fn reserve(&mut self, _: usize) {}

    #[inline]
    fn set_value(&mut self, _: usize, _: Token, _: &dyn Stream) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn skip(&self) -> bool {
        true
    }

    fn into_column(self: Box<Self>) -> Column {
        Column::Skip
    }
}
