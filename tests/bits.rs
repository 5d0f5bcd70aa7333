use bigint::{Bigint, Sign};

fn big(s: &str) -> Bigint {
    s.parse().unwrap()
}

#[test]
fn test_shift_chain() {
    let steps: [(u32, &str); 8] = [
        (1, "256"),
        (4, "4096"),
        (12, "16777216"),
        (20, "17592186044416"),
        (28, "4722366482869645213696"),
        (36, "324518553658426726783156020576256"),
        (44, "5708990770823839524233143877797980545530986496"),
        (
            52,
            "25711008708143844408671393477458601640355247900524685364822016",
        ),
    ];

    let mut x = Bigint::from(128);
    for &(shift, expected) in &steps {
        x <<= shift;
        assert_eq!(x.to_string(), expected);
    }
    assert_eq!(x.count(), 62);

    for &(shift, _) in steps.iter().rev() {
        x >>= shift;
    }
    assert_eq!(x, Bigint::from(128));
}

#[test]
fn test_shift_keeps_sign() {
    let x = Bigint::from(-5);
    assert_eq!(&x << 3u32, Bigint::from(-40));
    assert_eq!(&x >> 1usize, Bigint::from(-2));
    assert_eq!((&x >> 3u32).sign(), Sign::Zero);
    assert_eq!(Bigint::zero() << 1000usize, Bigint::zero());
    assert_eq!(big("123456789012345678901234567890") >> 1000u32, Bigint::zero());
}

#[test]
fn test_shift_is_scaling() {
    let x = big("-987654321987654321987654321");
    for n in [0u32, 1, 31, 32, 33, 63, 64, 65, 127, 200] {
        let scale = Bigint::from(2).pow(n);
        assert_eq!(&x << n, &x * &scale, "shift {}", n);
        assert_eq!(&x >> n, &x / &scale, "shift {}", n);
    }
}

#[test]
fn test_shr_truncates_toward_zero() {
    for (value, n, expected) in [
        (-5i64, 1u32, -2i64),
        (-1, 1, 0),
        (-7, 2, -1),
        (-8, 2, -2),
        (-9, 3, -1),
        (7, 1, 3),
    ] {
        let x = Bigint::from(value);
        assert_eq!(&x >> n, Bigint::from(expected), "{} >> {}", value, n);
        assert_eq!(&x >> n, &x / Bigint::from(1i64 << n), "{} >> {}", value, n);
    }

    let mut x = big("-0x1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
    x >>= 1u32;
    assert_eq!(x, big("-0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"));
    x >>= 128usize;
    assert_eq!(x.sign(), Sign::Zero);
}

#[test]
fn test_and_or_xor() {
    let a = big("0xF0F0F0F0F0F0F0F0F0F0F0F0");
    let b = big("0xFF00FF00");
    assert_eq!(&a & &b, big("0xF000F000"));
    assert_eq!(&a | &b, big("0xF0F0F0F0F0F0F0F0FFF0FFF0"));
    assert_eq!(&a ^ &b, big("0xF0F0F0F0F0F0F0F00FF00FF0"));
    assert_eq!(&a ^ &a, Bigint::zero());
    assert_eq!(&a & Bigint::zero(), Bigint::zero());
    assert_eq!(&a | Bigint::zero(), a);

    let mut c = a.clone();
    c &= &b;
    c |= big("0b1");
    c ^= big("0xF0000000");
    assert_eq!(c, big("0xF001"));
}

#[test]
fn test_negative_operands() {
    let a = Bigint::from(-6);
    let b = Bigint::from(3);
    assert_eq!(&a & &b, Bigint::from(2));
    assert_eq!(&a & &a, Bigint::from(-6));
    assert_eq!(&a | &b, Bigint::from(-7));
    assert_eq!(&a ^ &b, Bigint::from(-5));
    assert_eq!(&a ^ &a, Bigint::zero());
}

#[test]
fn test_not() {
    let ones = big("0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
    assert_eq!(!&ones, Bigint::zero());
    assert_eq!(!Bigint::zero(), Bigint::one());
    assert_eq!(!Bigint::one(), Bigint::zero());
    assert_eq!(!big("0b100101"), big("0b11010"));
    assert_eq!(!big("-0b100101"), big("-0b11010"));
    assert_eq!(!big("0x10000000000000000"), big("0xFFFFFFFFFFFFFFFF"));
}

#[test]
fn test_popcount() {
    assert_eq!(Bigint::zero().popcount(), 0);
    assert_eq!(Bigint::from(u128::MAX).popcount(), 128);
    assert_eq!(Bigint::from(i64::MIN).popcount(), 1);
    let x = big("0xF0F0F0F0F0F0F0F0F0F0F0F0");
    assert_eq!(x.popcount(), 48);
    assert_eq!(x.popcount() + (!&x).popcount(), x.bit_length());
}
