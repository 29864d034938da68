#![allow(dead_code)]

use bin2hex::IntoRecords;

pub struct RenderTestCase<T> {
    pub input: T,
    pub output: &'static str,
}

/// Run-length description of an input: each `(byte, count)` pair
/// yields `byte` repeated `count` times.
pub struct ByteSequence {
    pub ranges: Vec<(u8, usize)>,
    pub range_index: usize,
    pub elt_index: usize
}

impl ByteSequence {
    pub fn new(ranges: Vec<(u8, usize)>) -> Self {
        Self { ranges, range_index: 0, elt_index: 0 }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.ranges.iter().flat_map(|(b, len)| std::iter::repeat(*b).take(*len)).collect()
    }
}

impl Iterator for ByteSequence {
    type Item = u8;
    fn next(&mut self) -> Option<Self::Item> {
        if self.range_index >= self.ranges.len() {
            return None;
        }
        let (b, len) = self.ranges[self.range_index];
        if self.elt_index >= len {
            self.range_index += 1;
            self.elt_index = 0;
            return self.next();
        }
        self.elt_index += 1;
        Some(b)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let sh = self.ranges.iter().map(|(_, len)| len).sum();
        (sh, Some(sh))
    }
}

pub fn test_byte_case(test: RenderTestCase<ByteSequence>) -> anyhow::Result<()> {
    // Given
    let RenderTestCase {
        input,
        output,
    } = test;
    let expected_bytes = input.to_vec();

    // When
    let listing = input.into_records().convert_to::<String>();

    // Then
    similar_asserts::assert_eq!(output, &listing, "record listing did not equal expected value");
    assert_eq!(listing.lines().count(), expected_bytes.len(), "one line per byte");
    assert_eq!(bin2hex::decode_records(&listing)?, expected_bytes, "listing decodes back to input");
    Ok(())
}

#[macro_export]
macro_rules! byte_tests {
    ($($name:ident: $value:expr,)*) => {
    $(
        #[test]
        fn $name() -> anyhow::Result<()> {
            crate::common::test_byte_case($value)
        }
    )*
    };
}
