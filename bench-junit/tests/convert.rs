// Copyright Amazon Web Services, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod utils;

#[cfg(test)]
mod convert_tests {
    use std::io::stderr;

    use indoc::indoc;
    use rstest::rstest;

    use bench_junit::commands::{CONVERT, INPUT, MAX_FAILURE_TEXT, OUTPUT, OUTPUT_FORMAT};
    use bench_junit::utils::writer::WriteBuffer::{Stderr, Vec as WBVec};
    use bench_junit::utils::writer::Writer;
    use bench_junit::TestSuites;

    use crate::utils::{
        compare_write_buffer_with_file, compare_write_buffer_with_string,
        get_full_path_for_resource_file, get_reader_from_str, read_from_resource_file, temp_path,
        CommandTestRunner, StatusCode,
    };
    use crate::{assert_output_from_file_eq, assert_output_from_str_eq};

    #[derive(Default)]
    struct ConvertTestRunner<'args> {
        input: Option<&'args str>,
        output: Option<&'args str>,
        output_format: Option<&'args str>,
        max_failure_text: Option<usize>,
    }

    impl<'args> ConvertTestRunner<'args> {
        fn input(&'args mut self, arg: Option<&'args str>) -> &'args mut ConvertTestRunner {
            self.input = arg;
            self
        }

        fn output(&'args mut self, arg: Option<&'args str>) -> &'args mut ConvertTestRunner {
            self.output = arg;
            self
        }

        fn output_format(&'args mut self, arg: Option<&'args str>) -> &'args mut ConvertTestRunner {
            self.output_format = arg;
            self
        }

        fn max_failure_text(&'args mut self, arg: Option<usize>) -> &'args mut ConvertTestRunner {
            self.max_failure_text = arg;
            self
        }
    }

    impl<'args> CommandTestRunner for ConvertTestRunner<'args> {
        fn build_args(&self) -> Vec<String> {
            let mut args = vec![String::from(CONVERT)];

            if let Some(input) = self.input {
                args.push(format!("-{}", INPUT.1));
                args.push(get_full_path_for_resource_file(input));
            }

            if let Some(output) = self.output {
                args.push(format!("--{}", OUTPUT.0));
                args.push(String::from(output));
            }

            if let Some(format) = self.output_format {
                args.push(format!("-{}", OUTPUT_FORMAT.1));
                args.push(String::from(format));
            }

            if let Some(limit) = self.max_failure_text {
                args.push(format!("--{}", MAX_FAILURE_TEXT));
                args.push(limit.to_string());
            }

            args
        }
    }

    fn buffered_writer() -> Writer {
        Writer::new(WBVec(vec![]), Stderr(stderr()))
    }

    #[test]
    fn test_convert_dummybenchmarks_from_file() {
        let mut writer = buffered_writer();
        let status_code = ConvertTestRunner::default()
            .input(Option::from("resources/convert/data/dummybenchmarks.txt"))
            .run(&mut writer, &mut get_reader_from_str(""));

        assert_eq!(StatusCode::SUCCESS, status_code);
        assert_output_from_file_eq!("resources/convert/output/dummybenchmarks.xml", writer);
    }

    #[test]
    fn test_convert_reads_stdin_when_no_input_is_given() {
        let raw = read_from_resource_file("resources/convert/data/dummybenchmarks.txt");
        let mut writer = buffered_writer();
        let status_code =
            ConvertTestRunner::default().run(&mut writer, &mut get_reader_from_str(&raw));

        assert_eq!(StatusCode::SUCCESS, status_code);
        assert_output_from_file_eq!("resources/convert/output/dummybenchmarks.xml", writer);
    }

    #[test]
    fn test_convert_empty_input() {
        let mut writer = buffered_writer();
        let status_code = ConvertTestRunner::default().run(&mut writer, &mut get_reader_from_str(""));

        assert_eq!(StatusCode::SUCCESS, status_code);
        assert_output_from_str_eq!(
            indoc! {r#"
                <?xml version="1.0" encoding="UTF-8"?>
                <testsuites tests="0" failures="0" time="0.000000"/>
            "#},
            writer
        );
    }

    #[test]
    fn test_convert_mismatched_summary_reports_error() {
        let mut writer = Writer::new(WBVec(vec![]), WBVec(vec![]));
        let status_code = ConvertTestRunner::default()
            .input(Option::from("resources/convert/data/mismatched-summary.txt"))
            .run(&mut writer, &mut get_reader_from_str(""));

        assert_eq!(StatusCode::ERROR, status_code);

        let err = writer.err_into_string().unwrap();
        assert!(err.starts_with(
            "Error parsing go test output: line 6: mismatched package summary for \
             `k8s.io/test-infra/experiment/dummybenchmarks/other` with \
             `k8s.io/test-infra/experiment/dummybenchmarks` benchmarks.\nOutput:\ngoos: linux\n"
        ));
    }

    #[test]
    fn test_convert_mismatched_summary_writes_no_report() {
        let mut writer = buffered_writer();
        let status_code = ConvertTestRunner::default()
            .input(Option::from("resources/convert/data/mismatched-summary.txt"))
            .run(&mut writer, &mut get_reader_from_str(""));

        assert_eq!(StatusCode::ERROR, status_code);
        assert_output_from_str_eq!("", writer);
    }

    #[test]
    fn test_convert_json_output() {
        let mut writer = buffered_writer();
        let status_code = ConvertTestRunner::default()
            .input(Option::from("resources/convert/data/dummybenchmarks.txt"))
            .output_format(Option::from("json"))
            .run(&mut writer, &mut get_reader_from_str(""));

        assert_eq!(StatusCode::SUCCESS, status_code);

        let report: TestSuites = serde_json::from_str(&writer.into_string().unwrap()).unwrap();
        assert_eq!(report.suites.len(), 2);
        assert_eq!(report.tests(), 13);
        assert_eq!(report.failures(), 3);

        let skipped = &report.suites[0].test_cases[7];
        assert_eq!(skipped.name, "BenchmarkSkip");
        assert!(skipped.skipped);
    }

    #[rstest]
    #[case(10, "dummy_t...")]
    #[case(3, "dum")]
    fn test_convert_failure_text_limit(#[case] limit: usize, #[case] expected: &str) {
        let mut writer = buffered_writer();
        let status_code = ConvertTestRunner::default()
            .input(Option::from("resources/convert/data/dummybenchmarks.txt"))
            .output_format(Option::from("json"))
            .max_failure_text(Option::from(limit))
            .run(&mut writer, &mut get_reader_from_str(""));

        assert_eq!(StatusCode::SUCCESS, status_code);

        let report: TestSuites = serde_json::from_str(&writer.into_string().unwrap()).unwrap();
        let fatal = &report.suites[0].test_cases[10];
        assert_eq!(fatal.name, "BenchmarkFatal");
        assert_eq!(fatal.failure.as_ref().unwrap().text, expected);
        assert_eq!(fatal.properties[0].value, expected);
    }

    #[test]
    fn test_convert_writes_report_to_file() {
        let path = temp_path("convert-output.xml");
        let path_str = path.display().to_string();
        let mut writer = buffered_writer();
        let status_code = ConvertTestRunner::default()
            .input(Option::from("resources/convert/data/dummybenchmarks.txt"))
            .output(Option::from(path_str.as_str()))
            .run(&mut writer, &mut get_reader_from_str(""));

        assert_eq!(StatusCode::SUCCESS, status_code);

        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        pretty_assertions::assert_eq!(
            read_from_resource_file("resources/convert/output/dummybenchmarks.xml"),
            written
        );
        assert_output_from_str_eq!("", writer);
    }

    #[test]
    fn test_convert_missing_input_file() {
        let mut writer = Writer::new(WBVec(vec![]), WBVec(vec![]));
        let status_code = ConvertTestRunner::default()
            .input(Option::from("resources/convert/data/does-not-exist.txt"))
            .run(&mut writer, &mut get_reader_from_str(""));

        assert_eq!(StatusCode::ERROR, status_code);
        let err = writer.err_into_string().unwrap();
        assert!(err.starts_with("Unable to read `"), "{}", err);
        assert!(err.contains("does-not-exist.txt"), "{}", err);
    }

    #[test]
    fn test_convert_unwritable_output_file() {
        let mut writer = Writer::new(WBVec(vec![]), WBVec(vec![]));
        let status_code = ConvertTestRunner::default()
            .input(Option::from("resources/convert/data/dummybenchmarks.txt"))
            .output(Option::from("/definitely/not/a/bench-junit/dir/report.xml"))
            .run(&mut writer, &mut get_reader_from_str(""));

        assert_eq!(StatusCode::ERROR, status_code);
        let err = writer.err_into_string().unwrap();
        assert!(
            err.starts_with(
                "Unable to write report to `/definitely/not/a/bench-junit/dir/report.xml`"
            ),
            "{}",
            err
        );
    }
}
