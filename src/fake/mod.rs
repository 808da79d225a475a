//! Seedable fake-data context.
//!
//! Everything random in a run flows through one [`FakeContext`]: the RNG is a
//! ChaCha stream seeded once, and "now" is frozen at construction, so a seed
//! plus a timestamp fully determines the generated rows.

mod words;

use chrono::{Days, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use words::*;

pub struct FakeContext {
    rng: ChaCha8Rng,
    seed: u64,
    now: NaiveDateTime,
}

impl FakeContext {
    /// `now` is truncated to whole seconds; timestamps are rendered at
    /// second precision.
    pub fn new(seed: u64, now: NaiveDateTime) -> Self {
        let now = now.with_nanosecond(0).unwrap_or(now);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            now,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    pub fn between<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// Uniform pick from a non-empty pool.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }

    /// Uniform draw from `[low, high)` rounded to cents.
    pub fn money(&mut self, low: f64, high: f64) -> f64 {
        round2(self.rng.random_range(low..high))
    }

    // ─────────────────────────────────────────────
    // Dates
    // ─────────────────────────────────────────────

    pub fn years_ago(&self, years: u32) -> NaiveDate {
        self.today()
            .checked_sub_months(Months::new(years * 12))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Inclusive on both ends; `start > end` collapses to `start`.
    pub fn date_between(&mut self, start: NaiveDate, end: NaiveDate) -> NaiveDate {
        let span = (end - start).num_days().max(0) as u64;
        let offset = self.rng.random_range(0..=span);
        start.checked_add_days(Days::new(offset)).unwrap_or(end)
    }

    /// A date in `[today - years, today]`.
    pub fn date_within_years(&mut self, years: u32) -> NaiveDate {
        let start = self.years_ago(years);
        self.date_between(start, self.today())
    }

    /// A second-precision timestamp in `[now - years, now]`.
    pub fn date_time_within_years(&mut self, years: u32) -> NaiveDateTime {
        let start = self.years_ago(years).and_time(self.now.time());
        let span = (self.now - start).num_seconds().max(0);
        start + TimeDelta::seconds(self.rng.random_range(0..=span))
    }

    /// Birth date of someone aged `min_age..=max_age` today.
    pub fn date_of_birth(&mut self, min_age: u32, max_age: u32) -> NaiveDate {
        let end = self.years_ago(min_age);
        let start = self
            .years_ago(max_age + 1)
            .checked_add_days(Days::new(1))
            .unwrap_or(end);
        self.date_between(start, end)
    }

    // ─────────────────────────────────────────────
    // People and places
    // ─────────────────────────────────────────────

    pub fn first_name(&mut self) -> String {
        self.pick(FIRST_NAMES).to_string()
    }

    pub fn last_name(&mut self) -> String {
        self.pick(LAST_NAMES).to_string()
    }

    pub fn email(&mut self) -> String {
        let first = email_part(*self.pick(FIRST_NAMES));
        let last = email_part(*self.pick(LAST_NAMES));
        let domain = self.pick(EMAIL_DOMAINS);
        match self.rng.random_range(0..3) {
            0 => format!("{first}.{last}@{domain}"),
            1 => format!("{first}{}@{domain}", self.rng.random_range(1..100)),
            _ => format!("{}{last}@{domain}", &first[..1]),
        }
    }

    pub fn phone_number(&mut self) -> String {
        let format = *self.pick(PHONE_FORMATS);
        self.numerify(format)
    }

    pub fn postcode(&mut self) -> String {
        format!("{:05}", self.rng.random_range(501..=99950))
    }

    pub fn city(&mut self) -> String {
        let root = self.pick(CITY_ROOTS);
        let suffix = self.pick(CITY_SUFFIXES);
        if self.coin() {
            format!("{} {root}{suffix}", self.pick(CITY_PREFIXES))
        } else {
            format!("{root}{suffix}")
        }
    }

    pub fn state(&mut self) -> String {
        self.pick(STATES).0.to_string()
    }

    pub fn country(&mut self) -> String {
        self.pick(COUNTRIES).to_string()
    }

    /// Single-line postal address: street, optional unit, city, state, zip.
    pub fn address(&mut self) -> String {
        let number = self.rng.random_range(1..100_000);
        let street = self.pick(STREET_NAMES);
        let suffix = self.pick(STREET_SUFFIXES);
        let mut line = format!("{number} {street} {suffix}");
        if self.rng.random_bool(0.3) {
            let unit = self.pick(SECONDARY_UNITS);
            line.push_str(&format!(" {unit} {}", self.rng.random_range(100..1000)));
        }
        let city = self.city();
        let state = self.pick(STATES).1;
        let zip = self.postcode();
        format!("{line} {city}, {state} {zip}")
    }

    pub fn job(&mut self) -> String {
        self.pick(JOBS).to_string()
    }

    pub fn company(&mut self) -> String {
        match self.rng.random_range(0..COMPANY_FORMATS) {
            0 => format!("{} {}", self.pick(LAST_NAMES), self.pick(COMPANY_SUFFIXES)),
            1 => format!("{}-{}", self.pick(LAST_NAMES), self.pick(LAST_NAMES)),
            _ => format!(
                "{}, {} and {}",
                self.pick(LAST_NAMES),
                self.pick(LAST_NAMES),
                self.pick(LAST_NAMES)
            ),
        }
    }

    pub fn word(&mut self) -> String {
        self.pick(WORDS).to_string()
    }

    /// Replaces every `#` with a random digit.
    fn numerify(&mut self, format: &str) -> String {
        format
            .chars()
            .map(|c| match c {
                '#' => char::from(b'0' + self.rng.random_range(0..10u8)),
                c => c,
            })
            .collect()
    }
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn email_part(name: &str) -> String {
    let part: String = name
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if part.is_empty() {
        "user".into()
    } else {
        part
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(seed: u64) -> FakeContext {
        let now = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_nano_opt(13, 45, 10, 123_456_789)
            .unwrap();
        FakeContext::new(seed, now)
    }

    #[test]
    fn now_is_truncated_to_seconds() {
        assert_eq!(ctx(1).now().nanosecond(), 0);
    }

    #[test]
    fn same_seed_same_stream() {
        let (mut a, mut b) = (ctx(7), ctx(7));
        for _ in 0..50 {
            assert_eq!(a.address(), b.address());
            assert_eq!(a.email(), b.email());
        }
        let mut c = ctx(8);
        let from_a: Vec<_> = (0..20).map(|_| a.company()).collect();
        let from_c: Vec<_> = (0..20).map(|_| c.company()).collect();
        assert_ne!(from_a, from_c);
    }

    #[test]
    fn birth_dates_respect_age_bounds() {
        let mut ctx = ctx(3);
        let youngest = NaiveDate::from_ymd_opt(2007, 6, 15).unwrap();
        let oldest = NaiveDate::from_ymd_opt(1944, 6, 16).unwrap();
        for _ in 0..2000 {
            let dob = ctx.date_of_birth(18, 80);
            assert!(dob <= youngest && dob >= oldest, "{dob}");
        }
    }

    #[test]
    fn timestamps_stay_within_window() {
        let mut ctx = ctx(4);
        let now = ctx.now();
        let start = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(13, 45, 10)
            .unwrap();
        for _ in 0..2000 {
            let ts = ctx.date_time_within_years(1);
            assert!(ts >= start && ts <= now);
            assert_eq!(ts.nanosecond(), 0);
        }
    }

    #[test]
    fn date_between_handles_empty_and_inverted_ranges() {
        let mut ctx = ctx(5);
        let d = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(ctx.date_between(d, d), d);
        let earlier = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        assert_eq!(ctx.date_between(d, earlier), d);
    }

    #[test]
    fn formatted_fields_have_expected_shape() {
        let mut ctx = ctx(6);
        for _ in 0..200 {
            let phone = ctx.phone_number();
            assert!(!phone.contains('#'));
            assert!(phone.chars().filter(char::is_ascii_digit).count() >= 10);

            let zip = ctx.postcode();
            assert_eq!(zip.len(), 5);
            assert!(zip.chars().all(|c| c.is_ascii_digit()));

            let email = ctx.email();
            let (local, domain) = email.split_once('@').unwrap();
            assert!(!local.is_empty() && !local.contains('\''));
            assert!(EMAIL_DOMAINS.contains(&domain));

            assert!(!ctx.address().contains('\n'));
        }
    }

    #[test]
    fn email_local_part_is_plain_ascii() {
        let mut ctx = ctx(12);
        for _ in 0..500 {
            let email = ctx.email();
            let (local, _) = email.split_once('@').unwrap();
            assert!(local
                .chars()
                .all(|c| c == '.' || c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
        assert_eq!(email_part("O'Brien"), "obrien");
        assert_eq!(email_part("D'Andre"), "dandre");
    }

    #[test]
    fn money_is_rounded_to_cents() {
        let mut ctx = ctx(9);
        for _ in 0..500 {
            let v = ctx.money(5.0, 1000.0);
            assert!((5.0..=1000.0).contains(&v));
            assert!((v * 100.0 - (v * 100.0).round()).abs() < 1e-6);
        }
    }
}
