/// The largest quantity that may be taken in a single turn from a pile of `pile` tokens.
///
/// Grows the bound one step at a time for as long as the running sum of all
/// quantities up to the next candidate still stays below the pile size.
pub fn bound(pile: u32) -> u32 {
    let (mut bound, mut acc) = (0u32, 0u64);

    while acc + u64::from(bound) + 1 < u64::from(pile) {
        bound += 1;
        acc += u64::from(bound);
    }

    bound
}
