use gigint::cache::{BucketHash, MemoCache};
use gigint::primitives::{Digits, RADIX};
use gigint::Error;

fn d(cells: &[u32]) -> Digits {
    Digits::from_le(cells).unwrap()
}

fn zero() -> Digits {
    d(&[0])
}

fn one() -> Digits {
    d(&[1])
}

fn one_cell() -> Digits {
    d(&[999_999_999])
}

fn two_cells() -> Digits {
    d(&[0, 1])
}

fn three_cells() -> Digits {
    d(&[777_777_777, 999_999_999, 1])
}

fn four_cells() -> Digits {
    d(&[0, 111_111_111, 222_222_222, 3])
}

#[test]
fn digits_parse_decimal() {
    assert_eq!(Digits::parse_decimal("0").unwrap(), zero());
    assert_eq!(Digits::parse_decimal("1").unwrap(), one());
    assert_eq!(Digits::parse_decimal("999999999").unwrap(), one_cell());
    assert_eq!(Digits::parse_decimal("1000000000").unwrap(), two_cells());
    assert_eq!(
        Digits::parse_decimal("1999999999777777777").unwrap(),
        three_cells()
    );
    assert_eq!(
        Digits::parse_decimal("3222222222111111111000000000").unwrap(),
        four_cells()
    );
}

#[test]
fn digits_parse_strips_leading_zeros() {
    assert_eq!(Digits::parse_decimal("0000000000000").unwrap(), zero());
    assert_eq!(Digits::parse_decimal("0000000001000000000").unwrap(), two_cells());
}

#[test]
fn digits_parse_rejects_garbage() {
    assert_eq!(Digits::parse_decimal(""), Err(Error::EmptyInput));
    assert_eq!(
        Digits::parse_decimal("12a4"),
        Err(Error::InvalidDigit {
            index: 2,
            found: 'a'
        })
    );
}

#[test]
fn digits_from_le_validates_cells() {
    assert_eq!(
        Digits::from_le(&[1, RADIX]),
        Err(Error::DigitOutOfRange {
            index: 1,
            value: RADIX
        })
    );
    assert_eq!(Digits::from_le(&[]).unwrap(), zero());
    assert_eq!(Digits::from_le(&[5, 0, 0]).unwrap().as_slice(), &[5]);
}

#[test]
fn digits_decimal_len() {
    assert_eq!(zero().decimal_len(), 1);
    assert_eq!(one().decimal_len(), 1);
    assert_eq!(one_cell().decimal_len(), 9);
    assert_eq!(two_cells().decimal_len(), 10);
    assert_eq!(three_cells().decimal_len(), 19);
    assert_eq!(four_cells().decimal_len(), 28);
}

#[test]
fn digits_cell_count() {
    assert_eq!(zero().cell_count(), 1);
    assert_eq!(one_cell().cell_count(), 1);
    assert_eq!(two_cells().cell_count(), 2);
    assert_eq!(four_cells().cell_count(), 4);
}

#[test]
fn digits_from_u32() {
    assert_eq!(Digits::from_u32(0), zero());
    assert_eq!(Digits::from_u32(1), one());
    assert_eq!(Digits::from_u32(999_999_999), one_cell());
    assert_eq!(Digits::from_u32(1_000_000_000), two_cells());
    assert_eq!(Digits::from_u32(u32::MAX).as_slice(), &[294_967_295, 4]);
}

#[test]
fn digits_zero_and_one() {
    assert!(zero().is_zero());
    assert!(!one().is_zero());
    assert!(!two_cells().is_zero());
    assert!(!four_cells().is_zero());

    assert!(one().is_one());
    assert!(!zero().is_one());
    assert!(!one_cell().is_one());
    assert!(!three_cells().is_one());
}

#[test]
fn digits_ordering() {
    assert!(one() > zero());
    assert!(two_cells() > one_cell());
    assert!(four_cells() > three_cells());
    assert!(zero() < one());
    assert!(one_cell() < two_cells());
    assert!(three_cells() < four_cells());
    assert!(!(one() > one_cell()));
    assert!(!(two_cells() > three_cells()));

    assert_eq!(three_cells(), three_cells());
    assert_ne!(one_cell(), two_cells());

    // same length, decided by the top cell
    assert!(d(&[0, 2]) > d(&[999_999_999, 1]));
}

#[test]
fn digits_slice() {
    assert_eq!(one_cell().slice(1, 2), one_cell());
    assert_eq!(three_cells().slice(1, 4), three_cells());
    assert_eq!(three_cells().slice(2, 3), d(&[999_999_999]));
    assert_eq!(three_cells().slice(1, 3), d(&[777_777_777, 999_999_999]));
    assert_eq!(three_cells().slice(2, 4), d(&[999_999_999, 1]));
    assert_eq!(four_cells().slice(1, 2), zero());
}

#[test]
#[should_panic]
fn digits_slice_out_of_range() {
    let _ = one_cell().slice(1, 3);
}

#[test]
fn digits_shift_by_digit() {
    assert_eq!(zero().shift_by_digit(), zero());
    assert_eq!(one().shift_by_digit(), d(&[0, 1]));
    assert_eq!(two_cells().shift_by_digit(), d(&[0, 0, 1]));
    assert_eq!(
        four_cells().shift_by_digit(),
        d(&[0, 0, 111_111_111, 222_222_222, 3])
    );
}

#[test]
fn digits_add() {
    assert_eq!(zero().add(&one()), one());
    assert_eq!(one().add(&one_cell()), two_cells());
    assert_eq!(three_cells().add(&d(&[222_222_223])), d(&[0, 0, 2]));
    assert_eq!(
        four_cells().add(&three_cells()),
        d(&[777_777_777, 111_111_110, 222_222_224, 3])
    );
    // carry ripples out of the longer operand
    assert_eq!(d(&[999_999_999, 999_999_999]).add(&one()), d(&[0, 0, 1]));
}

#[test]
fn digits_sub() {
    assert_eq!(zero().sub(&zero()), zero());
    assert_eq!(two_cells().sub(&one_cell()), one());
    assert_eq!(two_cells().sub(&one()), one_cell());
    assert_eq!(
        three_cells().sub(&two_cells()),
        d(&[777_777_777, 999_999_998, 1])
    );
    assert_eq!(
        d(&[0, 0, 0, 1]).sub(&d(&[500_000_000, 888_888_888, 999_999_999])),
        d(&[500_000_000, 111_111_111])
    );
}

#[test]
fn digits_mul() {
    assert_eq!(zero().mul(&one_cell()), zero());
    assert_eq!(one().mul(&one_cell()), one_cell());
    assert_eq!(two_cells().mul(&one_cell()), d(&[0, 999_999_999]));
    assert_eq!(
        two_cells().mul(&three_cells()),
        d(&[0, 777_777_777, 999_999_999, 1])
    );
    assert_eq!(
        three_cells().mul(&three_cells()),
        d(&[395_061_729, 49_382_716, 111_111_108, 999_999_999, 3])
    );
    assert_eq!(
        three_cells().mul(&four_cells()),
        d(&[0, 913_580_247, 802_469_135, 506_172_836, 444_444_443, 6])
    );
}

#[test]
fn digits_single_div_rem() {
    let two = d(&[2]);

    let a = one_cell().single_div_rem(&one()).unwrap();
    assert_eq!(a.quotient, 999_999_999);
    assert_eq!(a.remainder, zero());

    let b = one_cell().single_div_rem(&two).unwrap();
    assert_eq!(b.quotient, 499_999_999);
    assert_eq!(b.remainder, one());

    let c = two_cells().single_div_rem(&two).unwrap();
    assert_eq!(c.quotient, 500_000_000);
    assert_eq!(c.remainder, zero());

    let e = two_cells().single_div_rem(&one_cell()).unwrap();
    assert_eq!(e.quotient, 1);
    assert_eq!(e.remainder, one());

    let f = one().single_div_rem(&two).unwrap();
    assert_eq!(f.quotient, 0);
    assert_eq!(f.remainder, one());
}

#[test]
fn digits_single_div_rem_by_zero() {
    assert_eq!(one().single_div_rem(&zero()), Err(Error::DivisionByZero));
}

#[test]
fn digits_single_div_rem_rejects_wide_quotient() {
    assert_eq!(
        d(&[0, 0, 1]).single_div_rem(&one()),
        Err(Error::QuotientOverflow)
    );
    assert_eq!(
        two_cells().single_div_rem(&one()),
        Err(Error::QuotientOverflow)
    );

    // largest dividend still allowed for this divisor
    let top = d(&[999_999_999, 1]).single_div_rem(&d(&[2])).unwrap();
    assert_eq!(top.quotient, 999_999_999);
    assert_eq!(top.remainder, one());
}

#[test]
fn digits_div_rem() {
    let cases = [
        (three_cells(), one(), three_cells(), zero()),
        (three_cells(), one_cell(), d(&[1, 2]), d(&[777_777_778])),
        (three_cells(), two_cells(), d(&[999_999_999, 1]), d(&[777_777_777])),
        (four_cells(), one(), four_cells(), zero()),
        (
            four_cells(),
            one_cell(),
            d(&[333_333_336, 222_222_225, 3]),
            d(&[333_333_336]),
        ),
        (four_cells(), two_cells(), d(&[111_111_111, 222_222_222, 3]), zero()),
        (
            four_cells(),
            three_cells(),
            d(&[611_111_111, 1]),
            d(&[586_419_753, 469_135_803]),
        ),
        (one(), four_cells(), zero(), one()),
    ];

    for (n, m, q, r) in cases {
        assert_eq!(n.div_rem(&m).unwrap(), (q, r), "{} / {}", n, m);
    }
}

#[test]
fn digits_div_rem_by_zero() {
    assert_eq!(four_cells().div_rem(&zero()), Err(Error::DivisionByZero));
}

#[test]
fn digits_pow_mod() {
    let run = |b: Digits, e: Digits, m: Digits| {
        let mut memo = MemoCache::with_buckets(92);
        b.pow_mod(&e, &m, &mut memo).unwrap()
    };

    assert_eq!(run(zero(), three_cells(), one()), zero());
    assert_eq!(run(two_cells(), three_cells(), two_cells()), zero());
    assert_eq!(run(one(), one_cell(), two_cells()), one());
    assert_eq!(run(two_cells(), zero(), three_cells()), one());
    assert_eq!(run(one_cell(), one(), three_cells()), one_cell());
    assert_eq!(run(two_cells(), one_cell(), one_cell()), one());
    assert_eq!(run(three_cells(), four_cells(), one_cell()), d(&[333_333_334]));
    assert_eq!(
        run(two_cells(), two_cells(), three_cells()),
        d(&[645_076_623, 339_392_621, 1])
    );
    assert_eq!(
        run(two_cells(), four_cells(), three_cells()),
        d(&[173_585_468, 182_018_086])
    );
}

#[test]
fn digits_pow_mod_cache_can_be_reused_after_clear() {
    let mut memo = MemoCache::with_buckets(16);
    let m = d(&[1_000_007]);

    let first = d(&[3]).pow_mod(&d(&[100]), &m, &mut memo).unwrap();
    assert!(!memo.is_empty());

    memo.clear();
    let second = d(&[3]).pow_mod(&d(&[100]), &m, &mut memo).unwrap();
    assert_eq!(first, second);
}

#[test]
fn digits_pow_mod_shared_memo_across_bases() {
    let mut memo = MemoCache::with_buckets(16);
    let m = d(&[1_000_007]);
    let e = d(&[100]);

    assert_eq!(d(&[3]).pow_mod(&e, &m, &mut memo).unwrap(), d(&[664_323]));
    assert_eq!(d(&[5]).pow_mod(&e, &m, &mut memo).unwrap(), d(&[873_534]));

    // different modulus, same memo
    assert_eq!(
        d(&[5]).pow_mod(&e, &d(&[1_000]), &mut memo).unwrap(),
        d(&[625])
    );
}

#[test]
fn digits_pow_mod_by_zero() {
    let mut memo = MemoCache::with_buckets(1);
    assert_eq!(
        one().pow_mod(&one(), &zero(), &mut memo),
        Err(Error::DivisionByZero)
    );
}

#[test]
fn digits_hash_follows_equality() {
    let a = Digits::parse_decimal("3222222222111111111000000000").unwrap();
    assert_eq!(a.bucket_hash(), four_cells().bucket_hash());
    assert_eq!(a.bucket_hash(), a.clone().bucket_hash());
}

#[test]
fn digits_display() {
    assert_eq!(zero().to_string(), "0");
    assert_eq!(two_cells().to_string(), "1000000000");
    assert_eq!(four_cells().to_string(), "3222222222111111111000000000");
}
