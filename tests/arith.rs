use bigint::{Bigint, RandomBigint, Sign};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn big(s: &str) -> Bigint {
    s.parse().unwrap()
}

fn random_value(rng: &mut ChaCha8Rng) -> Bigint {
    let bits = rng.gen_range(0..300);
    let mut x = rng.gen_bigint_bits(bits);
    if rng.gen() {
        x.negate();
    }
    x
}

const RSA_250: &str = "2140324650240744961264423072839333563008614715144755017797754920881418023447140136643345519095804679610992851872470914587687396261921557363047454770520805119056493106687691590019759405693457452230589325976697471681738069364894699871578494975937497937";
const RSA_250_P: &str = "64135289477071580278790190170577389084825014742943447208116859632024532344630238623598752668347708737661925585694639798853367";
const RSA_250_Q: &str = "33372027594978156556226010605355114227940760344767554666784520987023841729210037080257448673296881877565718986258036932062711";

#[test]
fn test_forty_digits() {
    let s = "1234567890123456789012345678901234567890";
    let x = big(s);
    assert_eq!(x.to_string(), s);
    assert_eq!(x.count(), 40);
    assert_eq!(
        (&x * -42i32).to_string(),
        "-51851851385185185138518518513851851851380"
    );
}

#[test]
fn test_rsa_250() {
    let p = big(RSA_250_P);
    let q = big(RSA_250_Q);
    let n = &p * &q;
    assert_eq!(n.to_string(), RSA_250);
    assert_eq!(n.count(), 250);
    assert_eq!(n.bit_length(), 829);

    assert_eq!(&n / &p, q);
    assert_eq!(&n % &q, Bigint::zero());
    assert_eq!(&p * 2u32, &p + &p);
    assert_eq!((&p * -1i32).to_string(), format!("-{}", RSA_250_P));
    assert_eq!(-&p, &p * -1i64);
    assert_eq!(p.gcd(&q), Bigint::one());
}

#[test]
fn test_division_chain() {
    let mut x = big("5499082447685365340") / big("-4059411");
    assert_eq!(x, big("-1354650329243"));
    x /= big("-456879");
    assert_eq!(x, big("2965008"));
}

#[test]
fn test_remainder_sign() {
    let a = Bigint::from(-44);
    let b = Bigint::from(42);
    assert_eq!(&a % &b, Bigint::from(-2));
    assert_eq!((&a % &b + &b) % &b, Bigint::from(40));
    assert_eq!(&a / &b, Bigint::from(-1));

    assert_eq!(Bigint::from(44) % -42, Bigint::from(2));
    assert_eq!(Bigint::from(44) / -42, Bigint::from(-1));
    assert_eq!(Bigint::from(-44) / -42, Bigint::from(1));
}

#[test]
fn test_cancellation_gives_zero() {
    let x = big("-98765432109876543210987654321");
    let sum = &x + &(-&x);
    assert_eq!(sum.sign(), Sign::Zero);
    assert_eq!((&x - &x).sign(), Sign::Zero);
}

#[test]
fn test_mixed_primitives() {
    let mut x = Bigint::from(u64::MAX);
    x += 1u64;
    assert_eq!(x.to_string(), "18446744073709551616");
    x -= 2i32;
    assert_eq!(x, u64::MAX - 1);
    x *= 3u32;
    assert_eq!(x.to_string(), "55340232221128654842");
    x /= 3i64;
    assert_eq!(x, u64::MAX - 1);
    x %= 10u32;
    assert_eq!(x, 4u64);

    let y = Bigint::from(-7);
    assert_eq!(&y * 0u32, Bigint::zero());
    assert_eq!((&y * 0i32).sign(), Sign::Zero);
    assert_eq!(&y * -3i32, 21i64);
    assert_eq!(&y + 7i64, 0i64);
    assert!(y < 0i64);
    assert!(y < 0u64);
    assert!(Bigint::from(u64::MAX) > i64::MAX);
}

#[test]
fn test_increment_decrement() {
    let mut x = Bigint::from(-2);
    assert_eq!(x.post_increment(), Bigint::from(-2));
    assert_eq!(x, Bigint::from(-1));
    x.increment().increment();
    assert_eq!(x, Bigint::one());
    assert_eq!(x.post_decrement(), Bigint::one());
    assert!(x.is_zero());
    x.decrement();
    assert_eq!(x, Bigint::from(-1));

    let mut carry = Bigint::from(u128::MAX);
    carry.increment();
    assert_eq!(carry, Bigint::one() << 128u32);
    carry.decrement();
    assert_eq!(carry, Bigint::from(u128::MAX));
}

#[test]
fn test_negate_in_place() {
    let mut x = Bigint::from(5);
    let y = -&x;
    assert_eq!(x, Bigint::from(5));
    assert_eq!(y, Bigint::from(-5));
    x.negate();
    assert_eq!(x, y);

    let mut zero = Bigint::zero();
    zero.negate();
    assert_eq!(zero.sign(), Sign::Zero);
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_divide_by_zero_panics() {
    let _ = Bigint::from(1) / Bigint::zero();
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_remainder_by_zero_panics() {
    let mut x = Bigint::from(1);
    x %= 0u32;
}

#[test]
fn test_checked_division() {
    let x = Bigint::from(17);
    assert_eq!(x.checked_div(&Bigint::zero()), None);
    assert_eq!(x.checked_rem(&Bigint::zero()), None);
    assert_eq!(x.checked_div(&Bigint::from(5)), Some(Bigint::from(3)));
    assert_eq!(x.checked_rem(&Bigint::from(-5)), Some(Bigint::from(2)));

    let err = x.try_div_rem(&Bigint::zero()).unwrap_err();
    assert!(err.is_arithmetic());
    assert_eq!(err.to_string(), "attempt to divide by zero");
}

#[test]
fn test_ordering() {
    let mut values: Vec<Bigint> = [
        "100000000000000000000000",
        "-5",
        "0",
        "-100000000000000000000000",
        "7",
        "-99999999999999999999999",
    ]
    .iter()
    .map(|s| big(s))
    .collect();
    values.sort();
    let sorted: Vec<String> = values.iter().map(Bigint::to_string).collect();
    assert_eq!(
        sorted,
        [
            "-100000000000000000000000",
            "-99999999999999999999999",
            "-5",
            "0",
            "7",
            "100000000000000000000000",
        ]
    );
}

#[test]
fn test_take_leaves_zero() {
    let mut x = big("123456789012345678901234567890");
    let y = std::mem::take(&mut x);
    assert!(x.is_zero());
    assert_eq!(y.count(), 30);
}

#[test]
fn test_sum_product() {
    let values: Vec<Bigint> = (1..=25).map(Bigint::from).collect();
    let sum: Bigint = values.iter().sum();
    assert_eq!(sum, Bigint::from(325));
    let factorial: Bigint = values.into_iter().product();
    assert_eq!(factorial.to_string(), "15511210043330985984000000");
}

#[test]
fn test_additive_laws() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..200 {
        let a = random_value(&mut rng);
        let b = random_value(&mut rng);
        let c = random_value(&mut rng);
        assert_eq!(&a + &b, &b + &a);
        assert_eq!((&a + &b) + &c, &a + (&b + &c));
        assert!((&a - &a).is_zero());
        assert!((&a + -&a).is_zero());
        assert_eq!(&a - &b, &a + -&b);
        assert_eq!((&a * &b) * &c, &a * (&b * &c));
        assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
    }
}

#[test]
fn test_division_laws() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..300 {
        let a = random_value(&mut rng);
        let b = random_value(&mut rng);
        if b.is_zero() {
            continue;
        }
        let (q, r) = a.div_rem(&b);
        assert_eq!(&q * &b + &r, a);
        assert!(r.abs() < b.abs());
        if !r.is_zero() {
            assert_eq!(r.sign(), a.sign());
        }
    }
}

#[test]
fn test_count_matches_string() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..100 {
        let a = random_value(&mut rng);
        assert_eq!(a.count(), a.abs().to_string().len());
    }
}
