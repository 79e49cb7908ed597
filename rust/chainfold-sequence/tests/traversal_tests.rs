use chainfold_sequence::builder::SequenceBuilder;
use chainfold_sequence::printer::write_columns;
use chainfold_sequence::random::{RandomSequenceOptions, generate_random_sequence};
use chainfold_sequence::sequence::Sequence;
use chainfold_sequence::transform::{Average, Collect, Diff, RunningAverage};
use chainfold_sequence::visitor::Visitor;

#[derive(Default)]
struct CallLog {
    elements: Vec<i64>,
    completions: usize,
}

impl Visitor<i64> for CallLog {
    fn on_element(&mut self, value: &i64) {
        self.elements.push(*value);
    }

    fn on_complete(&mut self) {
        self.completions += 1;
    }
}

fn random_sequences() -> impl Iterator<Item = Sequence<i64>> {
    (0..20).map(|i| {
        let options = RandomSequenceOptions::default()
            .with_count(i * 3)
            .with_max(1000)
            .with_seed(1234 + i as u64);
        generate_random_sequence(&options).unwrap()
    })
}

#[test]
fn test_visit_calls_match_size() {
    for s in random_sequences() {
        let mut log = CallLog::default();
        s.visit(&mut log);
        assert_eq!(log.elements.len(), s.size());
        assert_eq!(log.elements, s.iter().copied().collect::<Vec<_>>());
        assert_eq!(log.completions, 1);
    }
}

#[test]
fn test_pairwise_transforms_preserve_length() {
    for s in random_sequences() {
        let avg = s.accumulate(&mut RunningAverage);
        let diff = s.accumulate(&mut Diff);
        assert_eq!(avg.sequence().size(), s.size());
        assert_eq!(diff.sequence().size(), s.size());
        avg.sequence().verify();
        diff.sequence().verify();
    }
}

#[test]
fn test_transforms_match_definitions() {
    for s in random_sequences() {
        let input: Vec<i64> = s.iter().copied().collect();
        let avg: Vec<i64> = s.accumulate(&mut RunningAverage).sequence().iter().copied().collect();
        let diff: Vec<i64> = s.accumulate(&mut Diff).sequence().iter().copied().collect();
        for i in 0..input.len() {
            if i == 0 {
                assert_eq!(avg[i], input[i]);
                assert_eq!(diff[i], 0);
            } else {
                assert_eq!(avg[i], (input[i - 1] + input[i]) / 2);
                assert_eq!(diff[i], input[i] - input[i - 1]);
            }
        }
    }
}

#[test]
fn test_collect_and_average_agree_with_input() {
    for s in random_sequences().filter(|s| !s.is_empty()) {
        let copy = s.accumulate(&mut Collect).build();
        assert_eq!(copy, s);

        let input: Vec<i64> = s.iter().copied().collect();
        let expected = input.iter().sum::<i64>() / input.len() as i64;
        assert_eq!(s.accumulate(&mut Average).average().unwrap(), expected);
    }
}

#[test]
fn test_builder_size_after_adds() {
    let mut builder = SequenceBuilder::new();
    for n in 0..25 {
        assert_eq!(builder.sequence().size(), n);
        builder.add(n as i64);
    }
    assert_eq!(*builder.last().unwrap().data(), 24);
}

#[test]
fn test_demo_pipeline() {
    let input: Sequence<i64> = [5, 8, 3].into_iter().collect();
    let avg = input.accumulate(&mut RunningAverage);
    let diff = input.accumulate(&mut Diff);
    let diff_avg = diff.sequence().accumulate(&mut RunningAverage);

    let mut out = Vec::new();
    write_columns(
        &mut out,
        &[&input, avg.sequence(), diff.sequence(), diff_avg.sequence()],
    )
    .unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "0:\t5\t5\t0\t0\t\n1:\t8\t6\t3\t1\t\n2:\t3\t5\t-5\t-1\t\n"
    );
}
