use crate::error::CurveError;

/// One initialized tick as fetched from the pool's subgraph or lens
/// contract, sorted ascending and unique by `tick`.
///
/// `price0` is an externally computed decoration; the sweep carries it
/// through untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTick {
    pub tick: i32,
    pub liquidity_net: i128,
    pub liquidity_gross: u128,
    pub price0: Option<String>,
}

/// A tick annotated with the liquidity that is active while the price sits
/// in its bucket. Produced by [`compute_active_liquidity`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessedTick {
    pub tick: i32,
    pub liquidity_net: i128,
    pub liquidity_active: u128,
    pub price0: Option<String>,
}

/// Finds the pivot index for a tick list: the last tick at or below
/// `active_tick`.
///
/// Returns `CurveError::PivotNotFound` when the list is empty or the active
/// tick lies below every known tick; no recovery is attempted for that case.
pub fn find_pivot(ticks: &[RawTick], active_tick: i32) -> Result<usize, CurveError> {
    ticks
        .iter()
        .rposition(|t| t.tick <= active_tick)
        .ok_or(CurveError::PivotNotFound)
}

/// Expands a sparse tick list into a continuous active-liquidity curve.
///
/// `current_liquidity` is the pool's in-range liquidity at the pivot tick and
/// is carried onto the pivot entry exactly. Ticks above the pivot gain their
/// own net delta on the way up; ticks below lose the delta of the tick above
/// them on the way down, so crossing in either direction conserves liquidity.
/// The input is never mutated; output is ascending by tick.
pub fn compute_active_liquidity(
    ticks: &[RawTick],
    pivot: usize,
    current_liquidity: u128,
) -> Result<Vec<ProcessedTick>, CurveError> {
    if ticks.is_empty() || pivot >= ticks.len() {
        return Err(CurveError::PivotNotFound);
    }

    let mut out = Vec::with_capacity(ticks.len());

    // Descending sweep: undo the delta of the tick above the one being
    // computed, collect, then restore ascending order.
    let mut below = Vec::with_capacity(pivot);
    let mut active = current_liquidity;
    for i in (0..pivot).rev() {
        active = unapply_net(active, ticks[i + 1].liquidity_net)?;
        below.push(processed(&ticks[i], active));
    }
    below.reverse();
    out.extend(below);

    out.push(processed(&ticks[pivot], current_liquidity));

    // Ascending sweep: a tick's liquidity becomes active the moment price
    // reaches it from below.
    let mut active = current_liquidity;
    for tick in &ticks[pivot + 1..] {
        active = apply_net(active, tick.liquidity_net)?;
        out.push(processed(tick, active));
    }

    Ok(out)
}

fn processed(tick: &RawTick, liquidity_active: u128) -> ProcessedTick {
    ProcessedTick {
        tick: tick.tick,
        liquidity_net: tick.liquidity_net,
        liquidity_active,
        price0: tick.price0.clone(),
    }
}

fn apply_net(active: u128, net: i128) -> Result<u128, CurveError> {
    if net < 0 {
        let (z, underflow) = active.overflowing_sub(net.unsigned_abs());
        if underflow {
            return Err(CurveError::LiquidityUnderflow);
        }
        Ok(z)
    } else {
        let (z, overflow) = active.overflowing_add(net as u128);
        if overflow {
            return Err(CurveError::LiquidityOverflow);
        }
        Ok(z)
    }
}

fn unapply_net(active: u128, net: i128) -> Result<u128, CurveError> {
    if net < 0 {
        let (z, overflow) = active.overflowing_add(net.unsigned_abs());
        if overflow {
            return Err(CurveError::LiquidityOverflow);
        }
        Ok(z)
    } else {
        let (z, underflow) = active.overflowing_sub(net as u128);
        if underflow {
            return Err(CurveError::LiquidityUnderflow);
        }
        Ok(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(tick: i32, liquidity_net: i128) -> RawTick {
        RawTick {
            tick,
            liquidity_net,
            liquidity_gross: liquidity_net.unsigned_abs(),
            price0: None,
        }
    }

    // --- find_pivot --------------------------------------------------------

    #[test]
    fn find_pivot_picks_last_tick_at_or_below() {
        let ticks = [raw(-100, 10), raw(0, 20), raw(100, -10)];

        assert_eq!(find_pivot(&ticks, 0).unwrap(), 1);
        assert_eq!(find_pivot(&ticks, 50).unwrap(), 1);
        assert_eq!(find_pivot(&ticks, 100).unwrap(), 2);
        assert_eq!(find_pivot(&ticks, 500).unwrap(), 2);
        assert_eq!(find_pivot(&ticks, -100).unwrap(), 0);
    }

    #[test]
    fn find_pivot_fails_below_all_ticks() {
        let ticks = [raw(-100, 10), raw(0, 20)];

        let res = find_pivot(&ticks, -101);
        assert!(matches!(res, Err(CurveError::PivotNotFound)));
    }

    #[test]
    fn find_pivot_fails_on_empty_list() {
        let res = find_pivot(&[], 0);
        assert!(matches!(res, Err(CurveError::PivotNotFound)));
    }

    // --- compute_active_liquidity ------------------------------------------

    #[test]
    fn pivot_carries_current_liquidity_exactly() {
        let ticks = [raw(-60, 500), raw(0, 300), raw(60, -300), raw(120, -500)];
        let l0: u128 = 1_000_000;

        let curve = compute_active_liquidity(&ticks, 1, l0).unwrap();

        assert_eq!(curve.len(), ticks.len());
        assert_eq!(curve[1].tick, 0);
        assert_eq!(curve[1].liquidity_active, l0);
    }

    #[test]
    fn ascending_sweep_adds_net_at_each_tick() {
        let ticks = [raw(0, 100), raw(10, 50), raw(20, -30), raw(30, -120)];
        let l0: u128 = 1_000;

        let curve = compute_active_liquidity(&ticks, 0, l0).unwrap();

        assert_eq!(curve[0].liquidity_active, 1_000);
        assert_eq!(curve[1].liquidity_active, 1_050);
        assert_eq!(curve[2].liquidity_active, 1_020);
        assert_eq!(curve[3].liquidity_active, 900);
    }

    #[test]
    fn descending_sweep_removes_delta_of_tick_above() {
        let ticks = [raw(-30, 100), raw(-20, 50), raw(-10, -30), raw(0, 200)];
        let l0: u128 = 1_000;

        let curve = compute_active_liquidity(&ticks, 3, l0).unwrap();

        // walking down: 1000 - 200, then +30 (net was negative), then -50
        assert_eq!(curve[3].liquidity_active, 1_000);
        assert_eq!(curve[2].liquidity_active, 800);
        assert_eq!(curve[1].liquidity_active, 830);
        assert_eq!(curve[0].liquidity_active, 780);

        // output stays ascending by tick
        let ticks_out: Vec<i32> = curve.iter().map(|t| t.tick).collect();
        assert_eq!(ticks_out, vec![-30, -20, -10, 0]);
    }

    #[test]
    fn closed_window_conserves_liquidity() {
        // net deltas sum to zero: everything minted inside gets burned
        let ticks = [
            raw(-120, 700),
            raw(-60, 300),
            raw(0, -300),
            raw(60, 250),
            raw(120, -250),
            raw(180, -700),
        ];
        let l0: u128 = 1_000;

        let curve = compute_active_liquidity(&ticks, 1, l0).unwrap();

        // manual forward summation from the pivot
        assert_eq!(curve[1].liquidity_active, 1_000);
        assert_eq!(curve[2].liquidity_active, 700);
        assert_eq!(curve[3].liquidity_active, 950);
        assert_eq!(curve[4].liquidity_active, 700);
        assert_eq!(curve[5].liquidity_active, 0);
        // below the pivot: 1000 - 300 = 700
        assert_eq!(curve[0].liquidity_active, 700);

        // both ends land at the same zero-entry/zero-exit band shape
        assert!(curve.first().unwrap().liquidity_active >= curve[5].liquidity_active);
    }

    #[test]
    fn input_is_not_mutated_and_price0_is_carried() {
        let ticks = vec![
            RawTick {
                tick: 0,
                liquidity_net: 10,
                liquidity_gross: 10,
                price0: Some("1.0001".to_string()),
            },
            RawTick {
                tick: 10,
                liquidity_net: -10,
                liquidity_gross: 10,
                price0: Some("1.0011".to_string()),
            },
        ];
        let snapshot = ticks.clone();

        let curve = compute_active_liquidity(&ticks, 0, 50).unwrap();

        assert_eq!(ticks, snapshot);
        assert_eq!(curve[0].price0.as_deref(), Some("1.0001"));
        assert_eq!(curve[1].price0.as_deref(), Some("1.0011"));
    }

    #[test]
    fn single_tick_list_is_just_the_pivot() {
        let ticks = [raw(42, -7)];

        let curve = compute_active_liquidity(&ticks, 0, 123).unwrap();

        assert_eq!(curve.len(), 1);
        assert_eq!(curve[0].tick, 42);
        assert_eq!(curve[0].liquidity_active, 123);
    }

    #[test]
    fn empty_list_and_bad_pivot_fail() {
        assert!(matches!(
            compute_active_liquidity(&[], 0, 100),
            Err(CurveError::PivotNotFound)
        ));

        let ticks = [raw(0, 1)];
        assert!(matches!(
            compute_active_liquidity(&ticks, 1, 100),
            Err(CurveError::PivotNotFound)
        ));
    }

    #[test]
    fn inconsistent_data_surfaces_underflow_not_wraparound() {
        // burning more than is active going up
        let ticks = [raw(0, 0), raw(10, -500)];

        let res = compute_active_liquidity(&ticks, 0, 100);
        assert!(matches!(res, Err(CurveError::LiquidityUnderflow)));
    }

    #[test]
    fn descending_past_huge_mint_surfaces_underflow() {
        // tick above the pivot's neighbor minted more than L0 says existed
        let ticks = [raw(-10, 0), raw(0, 500)];

        let res = compute_active_liquidity(&ticks, 1, 100);
        assert!(matches!(res, Err(CurveError::LiquidityUnderflow)));
    }
}
