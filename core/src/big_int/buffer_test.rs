use super::buffer::{Magnitude, active_len, grown_capacity, halve_digits};
use pretty_assertions::assert_eq;

fn magnitude(text: &str, radix: u32) -> Magnitude {
    let digits = text
        .chars()
        .rev()
        .map(|c| c.to_digit(radix).unwrap() as u8)
        .collect();
    Magnitude::from_radix_digits(digits, radix)
}

#[test]
fn test_halve_decimal() {
    let mut digits = [1, 2, 3, 4, 5]; // 54321
    assert_eq!(halve_digits(&mut digits, 10), (5, 1));
    assert_eq!(digits, [0, 6, 1, 7, 2]); // 27160
}

#[test]
fn test_halve_hex() {
    let mut digits = [9, 2, 11, 10, 2, 8, 12]; // 0xC82AB29
    assert_eq!(halve_digits(&mut digits, 16), (7, 1));
    assert_eq!(digits, [4, 9, 5, 5, 1, 4, 6]); // 0x6415594
}

#[test]
fn test_halve_trims_top_digit() {
    let mut digits = [3, 1]; // 13
    assert_eq!(halve_digits(&mut digits, 10), (1, 1));
    assert_eq!(digits, [6, 0]);
}

#[test]
fn test_halve_odd_radix_parity() {
    // 11 in base 3 is 4: even even though the last digit is odd.
    let mut digits = [1, 1];
    assert_eq!(halve_digits(&mut digits, 3), (1, 0));
    assert_eq!(digits, [2, 0]);
}

#[test]
fn test_active_len() {
    assert_eq!(active_len(&[1, 2, 0, 0]), 2);
    assert_eq!(active_len(&[0, 0]), 0);
    assert_eq!(active_len(&[]), 0);
}

#[test]
fn test_with_capacity_is_zero() {
    let m = Magnitude::with_capacity(3);
    assert!(m.is_zero());
    assert_eq!(m.len(), 1);
    assert_eq!(m.capacity(), 3);
    assert_eq!(m.digits(), &[0]);
}

#[test]
fn test_from_radix_digits() {
    let m = Magnitude::from_radix_digits(vec![2, 4], 10); // 42
    assert_eq!(m.digits(), &[42]);
    assert_eq!(m.capacity(), 2);

    let m = Magnitude::from_radix_digits(vec![9, 2, 11, 10, 2, 8, 12], 16);
    assert_eq!(m.digits(), &[0x29, 0xAB, 0x82, 0x0C]);
    assert_eq!(m.capacity(), 7);
}

#[test]
fn test_from_decimal_text() {
    let m = magnitude("123456", 10);
    assert_eq!(m.digits(), &[0x40, 0xE2, 0x01]);
    assert_eq!(m.capacity(), 6);

    let m = magnitude("919476744083708551629", 10);
    assert_eq!(
        m.digits(),
        &[0xCD, 0xA1, 0x33, 0xC6, 0x25, 0x9B, 0x4D, 0xD8, 0x31]
    );
}

#[test]
fn test_from_odd_radix() {
    assert_eq!(magnitude("2101", 3).to_u64(), Some(64));
    assert_eq!(magnitude("1z2y3x", 36).to_u64(), Some(119390253));
}

#[test]
fn test_leading_zeros_are_trimmed() {
    let m = magnitude("0000000009", 10);
    assert_eq!(m.digits(), &[9]);

    let m = magnitude("000", 10);
    assert!(m.is_zero());
}

#[test]
fn test_exact_byte_boundary() {
    assert_eq!(magnitude("256", 10).digits(), &[0, 1]);
    assert_eq!(magnitude("255", 10).digits(), &[0xFF]);
}

#[test]
fn test_from_u64() {
    assert_eq!(Magnitude::from_u64(0).digits(), &[0]);
    assert_eq!(Magnitude::from_u64(0x2210).digits(), &[0x10, 0x22]);
    assert_eq!(Magnitude::from_u64(u64::MAX).digits(), &[0xFF; 8]);
    assert_eq!(Magnitude::from_u64(7).capacity(), 16);
}

#[test]
fn test_growth_policy() {
    assert_eq!(grown_capacity(3, 2), 3);
    assert_eq!(grown_capacity(3, 4), 6);
    assert_eq!(grown_capacity(3, 10), 10);

    let mut m = Magnitude::with_capacity(3);
    m.reserve(4);
    assert_eq!(m.capacity(), 6);
    m.reserve(1);
    assert_eq!(m.capacity(), 6);
}

#[test]
fn test_add_assign_carry() {
    let mut m = Magnitude::from_u64(0xFFFF);
    m.add_assign(&Magnitude::from_u64(1));
    assert_eq!(m.digits(), &[0, 0, 1]);
}

#[test]
fn test_add_assign_grows() {
    let mut m = Magnitude::with_capacity(1);
    m.add_assign(&magnitude("ffffffffffffffffffff", 16));
    assert_eq!(m.len(), 10);
    assert!(m.capacity() >= 11);
}

#[test]
fn test_sub_assign() {
    let mut m = Magnitude::from_u64(279);
    m.sub_assign(&Magnitude::from_u64(31), false);
    assert_eq!(m.to_u64(), Some(248));
}

#[test]
fn test_sub_assign_borrow_trims() {
    let mut m = Magnitude::from_u64(0x10000);
    m.sub_assign(&Magnitude::from_u64(1), false);
    assert_eq!(m.digits(), &[0xFF, 0xFF]);
}

#[test]
fn test_sub_assign_reversed() {
    let mut m = Magnitude::from_u64(31);
    m.sub_assign(&magnitude("10000000000000000000000", 16), true);
    assert_eq!(m, magnitude("ffffffffffffffffffffe1", 16));
}

#[test]
fn test_sub_assign_to_zero() {
    let mut m = Magnitude::from_u64(0xABCDEF);
    m.sub_assign(&Magnitude::from_u64(0xABCDEF), false);
    assert!(m.is_zero());
    assert_eq!(m.len(), 1);
}

#[test]
fn test_mul_assign() {
    let a = magnitude("123456789abcdef0123", 16);

    let mut m = a.clone();
    m.mul_assign(&Magnitude::from_u64(0xfedcba));
    assert_eq!(m, magnitude("121f9fffffffffef0255ae76e", 16));

    // Shorter operand on the left.
    let mut m = Magnitude::from_u64(0xfedcba);
    m.mul_assign(&a);
    assert_eq!(m, magnitude("121f9fffffffffef0255ae76e", 16));
}

#[test]
fn test_mul_assign_zero() {
    let mut m = magnitude("123456789abcdef0123", 16);
    m.mul_assign(&Magnitude::zero());
    assert!(m.is_zero());
}

#[test]
fn test_mul_assign_keeps_capacity() {
    let mut m = Magnitude::with_capacity(64);
    m.add_assign(&Magnitude::from_u64(3));
    m.mul_assign(&Magnitude::from_u64(5));
    assert_eq!(m.to_u64(), Some(15));
    assert_eq!(m.capacity(), 64);
}

#[test]
fn test_square_assign() {
    let mut m = magnitude("123456789abcdef0123", 16);
    m.square_assign();
    assert_eq!(m, magnitude("14b66dc33f6acdca878385a55a1b72d5b4ac9", 16));
}

#[test]
fn test_square_matches_mul() {
    for text in ["0", "1", "ff", "100", "ffffffff", "deadbeefcafebabe1234"] {
        let mut squared = magnitude(text, 16);
        squared.square_assign();

        let mut multiplied = magnitude(text, 16);
        multiplied.mul_assign(&magnitude(text, 16));

        assert_eq!(squared, multiplied, "{}", text);
    }
}

#[test]
fn test_bits() {
    assert_eq!(Magnitude::zero().bits(), 0);
    assert_eq!(Magnitude::from_u64(1).bits(), 1);
    assert_eq!(Magnitude::from_u64(0xFF).bits(), 8);
    assert_eq!(Magnitude::from_u64(0x100).bits(), 9);
    assert_eq!(magnitude("10000000000000000", 16).bits(), 65);
}

#[test]
fn test_to_u64() {
    assert_eq!(Magnitude::from_u64(u64::MAX).to_u64(), Some(u64::MAX));
    assert_eq!(magnitude("10000000000000000", 16).to_u64(), None);
}

#[test]
fn test_ordering() {
    assert!(magnitude("100", 16) > magnitude("ff", 16));
    assert!(magnitude("1ff", 16) > magnitude("1fe", 16));
    assert_eq!(magnitude("00ff", 16), Magnitude::from_u64(255));
}

#[test]
fn test_hex_formatting() {
    let m = magnitude("123456", 10);
    assert_eq!(format!("{:x}", m), "1e240");
    assert_eq!(format!("{:X}", m), "1E240");
    assert_eq!(format!("{:x}", Magnitude::from_u64(0x1000)), "1000");
}
