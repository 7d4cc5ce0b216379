/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use crate::error::{IconError, Result};

const PRIMITIVE: u16 = 0x11D;

/// Exponent table doubled in length so products never need a modulo
const EXP_TABLE: [u8; 512] = build_exp_table();
const LOG_TABLE: [u8; 256] = build_log_table();

const fn build_exp_table() -> [u8; 512] {
    let mut table = [0u8; 512];
    let mut value: u16 = 1;
    let mut i = 0;
    while i < 512 {
        table[i] = value as u8;
        value <<= 1;
        if value & 0x100 != 0 {
            value ^= PRIMITIVE;
        }
        i += 1;
    }
    table
}

const fn build_log_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[EXP_TABLE[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        EXP_TABLE[LOG_TABLE[a as usize] as usize + LOG_TABLE[b as usize] as usize]
    }

    /// `a / b`; `b` must be non-zero
    pub fn div(a: u8, b: u8) -> Option<u8> {
        if b == 0 {
            return None;
        }
        if a == 0 {
            return Some(0);
        }
        let diff = LOG_TABLE[a as usize] as usize + 255 - LOG_TABLE[b as usize] as usize;
        Some(EXP_TABLE[diff])
    }

    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }

    /// alpha^-n
    fn exp_inv(n: usize) -> u8 {
        EXP_TABLE[(255 - n % 255) % 255]
    }
}

/// Reed-Solomon decoder for one block; codewords are highest degree first
pub struct ReedSolomonDecoder {
    num_ecc_codewords: usize,
}

impl ReedSolomonDecoder {
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self { num_ecc_codewords }
    }

    /// Correct `received` in place; returns the number of corrected bytes
    pub fn decode(&self, received: &mut [u8]) -> Result<usize> {
        let syndrome = self.syndrome(received);
        if syndrome.iter().all(|&s| s == 0) {
            return Ok(0);
        }

        let sigma = self.error_locator(&syndrome)?;
        let positions = self.error_positions(&sigma, received.len())?;
        let values = self.error_values(&sigma, &syndrome, &positions, received.len())?;

        for (&pos, &value) in positions.iter().zip(&values) {
            received[pos] ^= value;
        }

        if self.syndrome(received).iter().any(|&s| s != 0) {
            return Err(IconError::Decode("uncorrectable Reed-Solomon block".into()));
        }
        Ok(positions.len())
    }

    /// S_i = r(alpha^i) for i in 0..num_ecc
    fn syndrome(&self, received: &[u8]) -> Vec<u8> {
        (0..self.num_ecc_codewords)
            .map(|i| {
                let x = Gf256::exp(i);
                // Horner: received[0] is the highest-degree coefficient
                received.iter().fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
            })
            .collect()
    }

    /// Berlekamp-Massey; sigma[0] = 1, lowest degree first
    fn error_locator(&self, syndrome: &[u8]) -> Result<Vec<u8>> {
        let mut sigma = vec![1u8];
        let mut prev = vec![1u8];
        let mut prev_discrepancy = 1u8;
        let mut errors = 0usize;
        let mut shift = 1usize;

        for n in 0..syndrome.len() {
            let discrepancy = (1..=errors)
                .filter(|&j| j < sigma.len())
                .fold(syndrome[n], |d, j| d ^ Gf256::mul(sigma[j], syndrome[n - j]));

            if discrepancy == 0 {
                shift += 1;
                continue;
            }

            let scale = Gf256::div(discrepancy, prev_discrepancy)
                .ok_or_else(|| IconError::Decode("zero discrepancy divisor".into()))?;
            let snapshot = sigma.clone();
            if sigma.len() < prev.len() + shift {
                sigma.resize(prev.len() + shift, 0);
            }
            for (j, &b) in prev.iter().enumerate() {
                sigma[j + shift] ^= Gf256::mul(scale, b);
            }

            if 2 * errors <= n {
                errors = n + 1 - errors;
                prev = snapshot;
                prev_discrepancy = discrepancy;
                shift = 1;
            } else {
                shift += 1;
            }
        }

        while sigma.len() > 1 && sigma.last() == Some(&0) {
            sigma.pop();
        }
        if sigma.len() - 1 > self.num_ecc_codewords / 2 {
            return Err(IconError::Decode("too many Reed-Solomon errors".into()));
        }
        Ok(sigma)
    }

    /// Chien search: position p is in error when sigma(alpha^-(n-1-p)) == 0
    fn error_positions(&self, sigma: &[u8], n: usize) -> Result<Vec<usize>> {
        let positions: Vec<usize> = (0..n)
            .filter(|&p| eval(sigma, Gf256::exp_inv(n - 1 - p)) == 0)
            .collect();

        if positions.len() != sigma.len() - 1 {
            return Err(IconError::Decode("error locator roots do not match degree".into()));
        }
        Ok(positions)
    }

    /// Forney: e_k = X_k * omega(X_k^-1) / sigma'(X_k^-1)
    fn error_values(
        &self,
        sigma: &[u8],
        syndrome: &[u8],
        positions: &[usize],
        n: usize,
    ) -> Result<Vec<u8>> {
        // omega = syndrome * sigma mod x^(2t)
        let mut omega = vec![0u8; syndrome.len()];
        for (i, slot) in omega.iter_mut().enumerate() {
            for j in 0..=i.min(sigma.len() - 1) {
                *slot ^= Gf256::mul(sigma[j], syndrome[i - j]);
            }
        }

        // Formal derivative keeps odd-degree terms only
        let sigma_prime: Vec<u8> = sigma
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| if i % 2 == 1 { c } else { 0 })
            .collect();

        positions
            .iter()
            .map(|&pos| {
                let degree = n - 1 - pos;
                let x_inv = Gf256::exp_inv(degree);
                let denominator = eval(&sigma_prime, x_inv);
                let quotient = Gf256::div(eval(&omega, x_inv), denominator)
                    .ok_or_else(|| IconError::Decode("error locator derivative is zero".into()))?;
                Ok(Gf256::mul(Gf256::exp(degree), quotient))
            })
            .collect()
    }
}

/// Evaluate a lowest-degree-first polynomial at `x`
fn eval(poly: &[u8], x: u8) -> u8 {
    poly.iter().rev().fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
}
