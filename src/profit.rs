// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Most profit from a sequence of daily stock quotes.
//!
//! Each day you may buy one unit, sell any number of units already bought,
//! or do nothing. The best strategy buys on every day and sells each unit
//! at the highest price still to come, so the answer is the sum over days
//! of `suffix_max[i] - price[i]`.

use std::ops::{Add, Sub};

/// The maximum of `quotes[i..]` for every `i`, in one backward scan.
///
/// ```
/// use snaking_katas::profit::suffix_maxima;
///
/// assert_eq!(suffix_maxima(&[1, 6, 5, 10, 8, 7]), vec![10, 10, 10, 10, 8, 7]);
/// ```
pub fn suffix_maxima<T: Copy + PartialOrd>(quotes: &[T]) -> Vec<T> {
    let mut maxima = quotes.to_vec();
    for i in (0..maxima.len().saturating_sub(1)).rev() {
        if maxima[i + 1] > maxima[i] {
            maxima[i] = maxima[i + 1];
        }
    }
    maxima
}

/// Total profit of the optimal buy/sell strategy over `quotes`.
///
/// Never negative. An empty sequence yields `T::default()`, i.e. zero.
///
/// ```
/// use snaking_katas::most_profit_from_stock_quotes;
///
/// assert_eq!(most_profit_from_stock_quotes(&[1, 2, 3, 4, 5, 6]), 15);
/// assert_eq!(most_profit_from_stock_quotes(&[6, 5, 4, 3, 2, 1]), 0);
/// ```
pub fn most_profit_from_stock_quotes<T>(quotes: &[T]) -> T
where
    T: Copy + PartialOrd + Default + Add<Output = T> + Sub<Output = T>,
{
    suffix_maxima(quotes)
        .into_iter()
        .zip(quotes)
        .fold(T::default(), |total, (peak, &price)| total + (peak - price))
}
