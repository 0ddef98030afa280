//! End-to-end tests for the generate workflow.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tempfile::TempDir;
use votebin::binary::{body_crc32, read_u32_be};
use votebin::build::{run_build, BuildOptions};
use votebin::config::{FileType, GeneratorConfig, Locality};
use votebin::lz11::decompress;
use votebin::signing::{verify, SIGNATURE_PREFIX_LEN};
use votebin::source::{DataSource, JsonDataset, Session};
use votebin::Error;

use crate::common::{sample_dataset, sample_now, test_signer, DATASET};

fn options(out: &Path, countries: Vec<u8>, config: GeneratorConfig) -> BuildOptions {
    BuildOptions {
        output_dir: out.to_path_buf(),
        countries,
        now: sample_now(),
        config,
        jobs: Some(2),
    }
}

fn check_container(container: &[u8], country: u8) {
    assert_eq!(read_u32_be(container, 4), Some(container.len() as u32));
    assert_eq!(read_u32_be(container, 8), Some(body_crc32(container)));
    assert_eq!(container[16], country);
}

#[test]
fn test_signed_run_verifies_and_decompresses() {
    let temp_dir = TempDir::new().unwrap();
    let signer = test_signer();
    let dataset = JsonDataset::load(Path::new(DATASET), 50).unwrap();

    let report = run_build(
        &dataset,
        Some(&signer),
        &options(temp_dir.path(), vec![1, 18, 110], GeneratorConfig::default()),
    )
    .unwrap();

    assert_eq!(report.built.len(), 3);
    assert!(report.failed.is_empty());

    for built in &report.built {
        let expected = temp_dir.path().join(format!("{:03}", built.country)).join("voting.bin");
        assert_eq!(built.path, expected);

        let signed = fs::read(&built.path).unwrap();
        assert_eq!(signed.len(), built.written_len);
        assert!(signed[..SIGNATURE_PREFIX_LEN].iter().all(|&b| b == 0));

        let payload = verify(&signer.public_key(), &signed).unwrap();
        let container = decompress(payload).unwrap();
        assert_eq!(container.len(), built.container_len);
        assert_eq!(read_u32_be(&container, 8), Some(built.crc32));
        check_container(&container, built.country);
    }
}

#[test]
fn test_whole_run_over_every_country() {
    let temp_dir = TempDir::new().unwrap();
    let report = run_build(
        &sample_dataset(),
        None,
        &options(temp_dir.path(), Vec::new(), GeneratorConfig::default()),
    )
    .unwrap();

    assert_eq!(report.built.len(), votebin::reference::COUNTRIES.len());
    let countries: Vec<u8> = report.built.iter().map(|b| b.country).collect();
    let mut sorted = countries.clone();
    sorted.sort_unstable();
    assert_eq!(countries, sorted);
}

#[test]
fn test_unsigned_run_writes_plain_containers() {
    let temp_dir = TempDir::new().unwrap();
    let report = run_build(
        &sample_dataset(),
        None,
        &options(temp_dir.path(), vec![49], GeneratorConfig::default()),
    )
    .unwrap();

    let container = fs::read(temp_dir.path().join("049/voting.bin")).unwrap();
    assert_eq!(container.len(), report.built[0].container_len);
    check_container(&container, 49);
}

#[test]
fn test_dated_file_names() {
    let temp_dir = TempDir::new().unwrap();
    let results = GeneratorConfig {
        file_type: FileType::Results,
        locality: Locality::National,
        ..Default::default()
    };
    run_build(&sample_dataset(), None, &options(temp_dir.path(), vec![18], results)).unwrap();
    // seven days before 2025-02-01
    assert!(temp_dir.path().join("018/2025/0125_r.bin").exists());

    let questions = GeneratorConfig {
        file_type: FileType::Questions,
        ..Default::default()
    };
    run_build(&sample_dataset(), None, &options(temp_dir.path(), vec![18], questions)).unwrap();
    // fourteen days before 2025-02-01
    assert!(temp_dir.path().join("018/2025/0118_q.bin").exists());
}

#[test]
fn test_unknown_country_stops_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let err = run_build(
        &sample_dataset(),
        None,
        &options(temp_dir.path(), vec![18, 2], GeneratorConfig::default()),
    )
    .unwrap_err();

    assert_eq!(err.country, 2);
    assert!(matches!(err.source, Error::UnknownCountry(2)));
    assert!(!temp_dir.path().join("018").exists());
}

/// A source whose store is unreachable for one country.
struct FlakySource {
    inner: JsonDataset,
    broken_country: u8,
}

struct FlakySession<'a> {
    inner: Box<dyn Session + 'a>,
    broken_country: u8,
}

impl DataSource for FlakySource {
    fn open_session(&self) -> votebin::Result<Box<dyn Session + '_>> {
        Ok(Box::new(FlakySession {
            inner: self.inner.open_session()?,
            broken_country: self.broken_country,
        }))
    }
}

impl Session for FlakySession<'_> {
    fn national_questions(&mut self, now: DateTime<Utc>) -> votebin::Result<Vec<votebin::source::Question>> {
        self.inner.national_questions(now)
    }

    fn worldwide_questions(&mut self, now: DateTime<Utc>) -> votebin::Result<Vec<votebin::source::Question>> {
        self.inner.worldwide_questions(now)
    }

    fn national_results(&mut self, now: DateTime<Utc>, limit: usize) -> votebin::Result<Vec<u32>> {
        self.inner.national_results(now, limit)
    }

    fn worldwide_result(&mut self, now: DateTime<Utc>) -> votebin::Result<Option<u32>> {
        self.inner.worldwide_result(now)
    }

    fn votes(&mut self, question_id: u32, country: Option<u8>) -> votebin::Result<Vec<votebin::source::VoteRecord>> {
        if country == Some(self.broken_country) {
            return Err(Error::data("votes table unavailable"));
        }
        self.inner.votes(question_id, country)
    }
}

#[test]
fn test_data_error_skips_only_that_country() {
    let temp_dir = TempDir::new().unwrap();
    let source = FlakySource {
        inner: sample_dataset(),
        broken_country: 49,
    };
    let report = run_build(
        &source,
        None,
        &options(temp_dir.path(), vec![18, 49, 110], GeneratorConfig::default()),
    )
    .unwrap();

    assert_eq!(report.built.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].country, 49);
    assert_eq!(report.failed[0].to_string(), "country 049: data: votes table unavailable");
    assert!(!temp_dir.path().join("049").exists());
}
