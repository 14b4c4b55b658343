//! Fixed-length, single-owner blocks of fractions.
//!
//! A `FractionCollection` owns one contiguous allocation of `Fraction`
//! records whose length is fixed when it is allocated. Records are reached
//! by index, never by address arithmetic.

use std::iter::{Enumerate, FusedIterator};
use std::slice;

use quotient_arith::{ArithError, Fraction};

use crate::{CollectionConfig, CollectionError, Listing, ValueSource};

/// An owned, fixed-length block of fractions.
///
/// Freshly allocated records read as `0/1` until the collection is
/// populated. The block cannot grow or shrink.
///
/// # Example
///
/// ```rust
/// use quotient_collection::{FractionCollection, PairSource};
/// use quotient_arith::Fraction;
///
/// let mut fractions = FractionCollection::allocate(2)?;
/// fractions.populate(&mut PairSource::new([(1, 2), (3, 4)]))?;
/// fractions.invert_all();
///
/// let inverted: Vec<_> = fractions.iter().collect();
/// assert_eq!(inverted, [(0, Fraction::new(2, 1)), (1, Fraction::new(4, 3))]);
///
/// fractions.release();
/// # Ok::<(), quotient_collection::CollectionError>(())
/// ```
#[derive(Debug)]
pub struct FractionCollection {
    records: Box<[Fraction]>,
    config: CollectionConfig,
}

impl FractionCollection {
    /// Allocates a collection of `count` fractions with the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCount`] for a negative count and
    /// [`CollectionError::AllocationFailure`] if storage cannot be reserved.
    pub fn allocate(count: i64) -> Result<Self, CollectionError> {
        Self::allocate_with(count, &CollectionConfig::default())
    }

    /// Allocates a collection of `count` fractions.
    ///
    /// A count of zero yields a valid, empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCount`] for a negative count,
    /// before any storage is touched, and
    /// [`CollectionError::AllocationFailure`] if the count exceeds
    /// `config.max_len` or the allocator refuses the request.
    pub fn allocate_with(count: i64, config: &CollectionConfig) -> Result<Self, CollectionError> {
        if count < 0 {
            return Err(CollectionError::InvalidCount(count));
        }
        let len = usize::try_from(count).map_err(|_| CollectionError::AllocationFailure {
            count: count.unsigned_abs(),
        })?;
        Self::with_len_and_config(len, config)
    }

    /// Allocates a collection of `len` fractions with the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::AllocationFailure`] if storage cannot be
    /// reserved.
    pub fn with_len(len: usize) -> Result<Self, CollectionError> {
        Self::with_len_and_config(len, &CollectionConfig::default())
    }

    /// Allocates a collection of `len` fractions.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::AllocationFailure`] if `len` exceeds
    /// `config.max_len` or the allocator refuses the request.
    #[tracing::instrument(skip(config))]
    pub fn with_len_and_config(
        len: usize,
        config: &CollectionConfig,
    ) -> Result<Self, CollectionError> {
        if len > config.max_len {
            tracing::warn!(max_len = config.max_len, "fraction count exceeds limit");
            return Err(CollectionError::AllocationFailure {
                count: requested(len),
            });
        }

        let mut records = Vec::new();
        if let Err(error) = records.try_reserve_exact(len) {
            tracing::warn!(%error, "failed to reserve fraction block");
            return Err(CollectionError::AllocationFailure {
                count: requested(len),
            });
        }
        records.resize(len, Fraction::ZERO);

        tracing::debug!("allocated fraction block");
        Ok(Self {
            records: records.into_boxed_slice(),
            config: config.clone(),
        })
    }

    /// Fills every record from `source`, in index order.
    ///
    /// For each index the numerator is requested before the denominator.
    /// Existing contents are overwritten. If an error is returned, records
    /// before the failing index hold their new values and the rest are
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Source`] if the source fails and
    /// [`CollectionError::ZeroDenominator`] if a zero denominator is
    /// supplied while the configuration rejects them.
    #[tracing::instrument(skip_all, fields(len = self.records.len()))]
    pub fn populate<S>(&mut self, source: &mut S) -> Result<(), CollectionError>
    where
        S: ValueSource + ?Sized,
    {
        let reject_zero = self.config.reject_zero_denominator;

        for (index, record) in self.records.iter_mut().enumerate() {
            let numerator = source.numerator(index)?;
            let denominator = source.denominator(index)?;

            if denominator == 0 {
                if reject_zero {
                    return Err(CollectionError::ZeroDenominator { index });
                }
                tracing::trace!(index, "accepted zero denominator");
            }

            *record = Fraction::new(numerator, denominator);
        }

        tracing::debug!("populated fraction block");
        Ok(())
    }

    /// Swaps numerator and denominator of every record in place.
    ///
    /// Applying this twice restores the original contents. A record `0/d`
    /// becomes `d/0`; arithmetic on it will report division by zero.
    pub fn invert_all(&mut self) {
        for record in &mut *self.records {
            record.invert();
        }
        tracing::trace!(len = self.records.len(), "inverted fraction block");
    }

    /// Reduces every record to lowest terms with a positive denominator.
    ///
    /// # Errors
    ///
    /// Stops at the first record that cannot be reduced. Records before it
    /// are already reduced, which leaves their values unchanged.
    pub fn reduce_all(&mut self) -> Result<(), CollectionError> {
        for (index, record) in self.records.iter_mut().enumerate() {
            *record = record.reduced().map_err(|error| match error {
                ArithError::ZeroDenominator => CollectionError::ZeroDenominator { index },
                other => CollectionError::Arith(other),
            })?;
        }
        Ok(())
    }

    /// Adds up all records with unreduced fraction addition.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Arith`] on a zero denominator or overflow.
    pub fn sum(&self) -> Result<Fraction, CollectionError> {
        Ok(quotient_arith::sum(self.records.iter().copied())?)
    }

    /// Returns an iterator over `(index, fraction)` pairs in ascending
    /// index order.
    ///
    /// The iterator only reads the collection; call `iter` again to restart.
    #[must_use]
    pub fn iter(&self) -> Entries<'_> {
        Entries {
            inner: self.records.iter().enumerate(),
        }
    }

    /// Returns a display sink listing every record.
    #[must_use]
    pub fn listing(&self) -> Listing<'_> {
        Listing::new(&self.records)
    }

    /// Returns the record at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Fraction> {
        self.records.get(index).copied()
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Fraction] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the configuration the collection was allocated with.
    #[must_use]
    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    /// Returns the storage to the allocator.
    ///
    /// The collection is consumed, so it cannot be used or released again:
    ///
    /// ```compile_fail
    /// use quotient_collection::FractionCollection;
    ///
    /// let fractions = FractionCollection::allocate(3)?;
    /// fractions.release();
    /// let _ = fractions.len();
    /// # Ok::<(), quotient_collection::CollectionError>(())
    /// ```
    #[tracing::instrument(skip_all, fields(len = self.records.len()))]
    pub fn release(self) {
        let Self { records, .. } = self;
        drop(records);
        tracing::debug!("released fraction block");
    }
}

/// Collections are equal when their records are equal element-wise; the
/// configuration they were allocated with is not compared.
impl PartialEq for FractionCollection {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for FractionCollection {}

impl<'a> IntoIterator for &'a FractionCollection {
    type Item = (usize, Fraction);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Widens a record count for error reporting.
fn requested(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

/// Iterator over the `(index, fraction)` pairs of a collection.
///
/// Created by [`FractionCollection::iter`].
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    inner: Enumerate<slice::Iter<'a, Fraction>>,
}

impl Iterator for Entries<'_> {
    type Item = (usize, Fraction);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, fraction)| (index, *fraction))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(index, fraction)| (index, *fraction))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}
