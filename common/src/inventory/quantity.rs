use std::fmt;

use crate::error::NegativeQuantity;
use crate::inventory::GameProfile;

/// How many of one identity are held, split by game profile.
///
/// Components are unsigned, so a vector can never hold a negative count.
/// Counts are stored wider than any single input quantity, so sums of parsed
/// input do not reach the saturation point of [`QuantityVector::add`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuantityVector {
    counts: [u64; GameProfile::COUNT],
}

impl QuantityVector {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn single(profile: GameProfile, n: u64) -> Self {
        let mut counts = [0; GameProfile::COUNT];
        counts[profile.index()] = n;
        Self { counts }
    }

    /// Builds a vector from partial input; missing profiles are 0.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (GameProfile, u64)>,
    {
        let mut counts = [0; GameProfile::COUNT];
        for (profile, n) in pairs {
            counts[profile.index()] = n;
        }
        Self { counts }
    }

    pub fn get(&self, profile: GameProfile) -> u64 {
        self.counts[profile.index()]
    }

    /// Iterates over `(profile, count)` in declared profile order.
    pub fn iter(&self) -> impl Iterator<Item = (GameProfile, u64)> + '_ {
        GameProfile::ALL
            .into_iter()
            .map(|profile| (profile, self.get(profile)))
    }

    /// Pointwise sum.
    pub fn add(&self, other: &QuantityVector) -> QuantityVector {
        let mut counts = self.counts;
        for (count, extra) in counts.iter_mut().zip(other.counts) {
            *count = count.saturating_add(extra);
        }
        QuantityVector { counts }
    }

    /// Pointwise difference.
    ///
    /// Fails on the first profile (in declared order) that would go negative.
    pub fn subtract(&self, other: &QuantityVector) -> Result<QuantityVector, NegativeQuantity> {
        let mut counts = [0; GameProfile::COUNT];
        for profile in GameProfile::ALL {
            let minuend = self.get(profile);
            let subtrahend = other.get(profile);
            let remaining = minuend.checked_sub(subtrahend).ok_or(NegativeQuantity {
                profile,
                minuend,
                subtrahend,
            })?;
            counts[profile.index()] = remaining;
        }
        Ok(QuantityVector { counts })
    }

    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0, |sum, &n| sum.saturating_add(n))
    }
}

impl fmt::Display for QuantityVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.counts.iter().map(|n| format!("{n:2}")).collect();
        f.write_str(&cells.join("|"))
    }
}
