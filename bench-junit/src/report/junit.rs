use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::io::Write;

use quick_xml::{
    escape::escape,
    events::{attributes::Attribute, BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    name::QName,
    Writer,
};

use crate::parser::Result;
use crate::report::{Failure, Property, TestCase, TestSuite, TestSuites};

pub(crate) fn serialize(report: &TestSuites, writer: &mut dyn Write) -> Result<()> {
    let mut writer = Writer::new_with_indent(writer, b' ', 4);
    let decl = BytesDecl::new("1.0", Some("UTF-8"), None);

    writer.write_event(Event::Decl(decl))?;
    EventType::TestSuites(report).serialize(&mut writer)?;
    writer.write_indent()?;

    Ok(())
}

/// Attribute values may carry multi-line failure text. Whitespace other than
/// plain spaces is written as character references so it survives attribute
/// value normalization on the reading side.
fn multiline_attribute<'a>(key: &'a str, value: &str) -> Attribute<'a> {
    let escaped = escape(value)
        .replace('\n', "&#xA;")
        .replace('\r', "&#xD;")
        .replace('\t', "&#x9;");

    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escaped.into_bytes()),
    }
}

#[derive(Debug)]
enum EventType<'report> {
    TestSuites(&'report TestSuites),
    TestSuite(&'report TestSuite),
    TestCase(&'report TestCase),
    Failure(&'report Failure),
    Skipped,
    Properties(&'report [Property]),
    Property(&'report Property),
}

impl<'report> Display for EventType<'report> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            EventType::TestSuites(..) => "testsuites",
            EventType::TestSuite(..) => "testsuite",
            EventType::TestCase(..) => "testcase",
            EventType::Failure(..) => "failure",
            EventType::Skipped => "skipped",
            EventType::Properties(..) => "properties",
            EventType::Property(..) => "property",
        };
        f.write_str(tag)
    }
}

impl<'report> EventType<'report> {
    fn start_tag(&self) -> BytesStart<'static> {
        BytesStart::new(self.to_string())
    }

    fn serialize_start_event(
        &self,
        writer: &mut Writer<impl Write>,
        tag: BytesStart<'_>,
    ) -> Result<()> {
        Ok(writer.write_event(Event::Start(tag))?)
    }

    fn serialize_end_event(&self, writer: &mut Writer<impl Write>) -> Result<()> {
        Ok(writer.write_event(Event::End(BytesEnd::new(self.to_string())))?)
    }

    fn extend_attributes(&self, tag: &mut BytesStart<'_>) {
        match self {
            EventType::TestSuites(suites) => {
                tag.extend_attributes([
                    ("tests", suites.tests().to_string().as_str()),
                    ("failures", suites.failures().to_string().as_str()),
                    ("time", format!("{:.6}", suites.time()).as_str()),
                ]);
            }
            EventType::TestSuite(suite) => {
                tag.extend_attributes([
                    ("name", suite.name.as_str()),
                    ("tests", suite.tests.to_string().as_str()),
                    ("failures", suite.failures.to_string().as_str()),
                    ("time", suite.time.as_str()),
                ]);
            }
            EventType::TestCase(test_case) => {
                tag.extend_attributes([
                    ("class_name", test_case.class_name.as_str()),
                    ("name", test_case.name.as_str()),
                    ("time", test_case.time.as_str()),
                ]);
            }
            EventType::Property(property) => {
                tag.push_attribute(("name", property.name.as_str()));
                tag.push_attribute(multiline_attribute("value", &property.value));
            }
            EventType::Failure(..) | EventType::Skipped | EventType::Properties(..) => {}
        }
    }

    fn serialize(&self, writer: &mut Writer<impl Write>) -> Result<()> {
        let mut tag = self.start_tag();
        self.extend_attributes(&mut tag);

        match self {
            EventType::TestSuites(suites) => {
                if suites.suites.is_empty() {
                    writer.write_event(Event::Empty(tag))?;
                    return Ok(());
                }
                self.serialize_start_event(writer, tag)?;
                for suite in &suites.suites {
                    EventType::TestSuite(suite).serialize(writer)?;
                }
                self.serialize_end_event(writer)?;
            }
            EventType::TestSuite(suite) => {
                if suite.test_cases.is_empty() {
                    writer.write_event(Event::Empty(tag))?;
                    return Ok(());
                }
                self.serialize_start_event(writer, tag)?;
                for test_case in &suite.test_cases {
                    EventType::TestCase(test_case).serialize(writer)?;
                }
                self.serialize_end_event(writer)?;
            }
            EventType::TestCase(test_case) => {
                self.serialize_start_event(writer, tag)?;
                if let Some(failure) = &test_case.failure {
                    EventType::Failure(failure).serialize(writer)?;
                }
                if test_case.skipped {
                    EventType::Skipped.serialize(writer)?;
                }
                EventType::Properties(&test_case.properties).serialize(writer)?;
                self.serialize_end_event(writer)?;
            }
            EventType::Failure(failure) => {
                if failure.text.is_empty() {
                    writer.write_event(Event::Empty(tag))?;
                } else {
                    self.serialize_start_event(writer, tag)?;
                    writer.write_event(Event::Text(BytesText::new(&failure.text)))?;
                    self.serialize_end_event(writer)?;
                }
            }
            EventType::Properties(properties) => {
                if properties.is_empty() {
                    writer.write_event(Event::Empty(tag))?;
                    return Ok(());
                }
                self.serialize_start_event(writer, tag)?;
                for property in properties.iter() {
                    EventType::Property(property).serialize(writer)?;
                }
                self.serialize_end_event(writer)?;
            }
            EventType::Skipped | EventType::Property(..) => {
                writer.write_event(Event::Empty(tag))?;
            }
        }

        Ok(())
    }
}
