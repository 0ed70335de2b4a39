use crate::extract::{TextBlock, extract_blocks};
use crate::stats::classify::{CharClass, classify};
use crate::stats::types::{BlockStatistics, CommonStatistics, Rounding};

/// Statistics for one run: the aggregate record plus one record per block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub common: CommonStatistics,
    pub blocks: Vec<BlockStatistics>,
}

impl Report {
    pub fn from_blocks(blocks: &[TextBlock], rounding: Rounding) -> Self {
        Report {
            common: CommonStatistics::from_blocks(blocks, rounding),
            blocks: blocks.iter().map(BlockStatistics::from_block).collect(),
        }
    }
}

/// Extract blocks from `text` and compute their statistics
pub fn analyze(text: &str, left: char, right: char, rounding: Rounding) -> Report {
    let blocks = extract_blocks(text, left, right);
    Report::from_blocks(&blocks, rounding)
}

impl CommonStatistics {
    /// An empty block list yields all zeros
    pub fn from_blocks(blocks: &[TextBlock], rounding: Rounding) -> Self {
        let lengths: Vec<usize> = blocks.iter().map(TextBlock::len).collect();

        let avg_block_length = if lengths.is_empty() {
            0
        } else {
            let total: usize = lengths.iter().sum();
            rounding.apply(total as f64 / lengths.len() as f64)
        };

        let stats = CommonStatistics {
            total_blocks: lengths.len(),
            avg_block_length,
            max_block_length: lengths.iter().copied().max().unwrap_or(0),
            min_block_length: lengths.iter().copied().min().unwrap_or(0),
        };

        log::trace!("Common statistics: {:?}", stats);
        stats
    }
}

impl BlockStatistics {
    pub fn from_block(block: &TextBlock) -> Self {
        let mut text_length = 0;
        let mut latin_count = 0;
        let mut cyr_count = 0;
        let mut cypher_count = 0;

        for c in block.text().chars() {
            text_length += 1;
            match classify(c) {
                CharClass::Latin => latin_count += 1,
                CharClass::Cyrillic => cyr_count += 1,
                CharClass::Digit => cypher_count += 1,
                CharClass::Other => {}
            }
        }

        BlockStatistics {
            text: block.text().to_string(),
            text_length,
            latin_count,
            cyr_count,
            cypher_count,
            other_sym_count: text_length - latin_count - cyr_count - cypher_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn blocks(texts: &[&str]) -> Vec<TextBlock> {
        texts.iter().map(|t| TextBlock::new(*t)).collect()
    }

    #[test]
    fn test_empty_block_list_is_all_zero() {
        let stats = CommonStatistics::from_blocks(&[], Rounding::default());
        assert_eq!(stats, CommonStatistics::default());
        assert_eq!(stats.total_blocks, 0);
        assert_eq!(stats.avg_block_length, 0);
        assert_eq!(stats.max_block_length, 0);
        assert_eq!(stats.min_block_length, 0);
    }

    #[test]
    fn test_two_equal_blocks() {
        let stats = CommonStatistics::from_blocks(&blocks(&["bc", "ef"]), Rounding::default());
        assert_eq!(
            stats,
            CommonStatistics {
                total_blocks: 2,
                avg_block_length: 2,
                max_block_length: 2,
                min_block_length: 2,
            }
        );
    }

    #[test]
    fn test_average_one_and_a_half_rounds_up() {
        let input = blocks(&["a", "bb"]);
        assert_eq!(
            CommonStatistics::from_blocks(&input, Rounding::HalfAwayFromZero).avg_block_length,
            2
        );
        assert_eq!(
            CommonStatistics::from_blocks(&input, Rounding::HalfEven).avg_block_length,
            2
        );
    }

    #[test]
    fn test_average_two_and_a_half_depends_on_rounding() {
        let input = blocks(&["ab", "cde"]);
        assert_eq!(
            CommonStatistics::from_blocks(&input, Rounding::HalfAwayFromZero).avg_block_length,
            3
        );
        assert_eq!(
            CommonStatistics::from_blocks(&input, Rounding::HalfEven).avg_block_length,
            2
        );
    }

    #[test]
    fn test_min_max_use_char_lengths() {
        let stats = CommonStatistics::from_blocks(&blocks(&["дом", "x", "hello"]), Rounding::default());
        assert_eq!(stats.total_blocks, 3);
        assert_eq!(stats.min_block_length, 1);
        assert_eq!(stats.max_block_length, 5);
        assert_eq!(stats.avg_block_length, 3);
    }

    #[test]
    fn test_mixed_block_classification() {
        let stats = BlockStatistics::from_block(&TextBlock::new("abcАБВ123!"));
        assert_eq!(stats.text, "abcАБВ123!");
        assert_eq!(stats.text_length, 10);
        assert_eq!(stats.latin_count, 3);
        assert_eq!(stats.cyr_count, 3);
        assert_eq!(stats.cypher_count, 3);
        assert_eq!(stats.other_sym_count, 1);
    }

    #[test]
    fn test_analyze_preserves_block_order() {
        let report = analyze("a[bc]d[ef]g", '[', ']', Rounding::default());
        assert_eq!(report.common.total_blocks, 2);
        let texts: Vec<&str> = report.blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["bc", "ef"]);
    }

    #[test]
    fn test_analyze_without_delimiters() {
        let report = analyze("nothing here", '[', ']', Rounding::default());
        assert_eq!(report.common, CommonStatistics::default());
        assert!(report.blocks.is_empty());
    }

    // The four counts always partition the block length.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_class_counts_partition_length(text in "\\PC{1,40}") {
            let stats = BlockStatistics::from_block(&TextBlock::new(text.clone()));
            prop_assert_eq!(stats.text_length, text.chars().count());
            prop_assert_eq!(
                stats.other_sym_count,
                stats.text_length - stats.latin_count - stats.cyr_count - stats.cypher_count
            );
        }
    }

    // The rounded average stays within [min, max].
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_average_between_min_and_max(
            texts in prop::collection::vec("[a-z]{1,20}", 1..20),
            half_even in any::<bool>()
        ) {
            let rounding = if half_even { Rounding::HalfEven } else { Rounding::HalfAwayFromZero };
            let input: Vec<TextBlock> = texts.iter().map(|t| TextBlock::new(t.as_str())).collect();
            let stats = CommonStatistics::from_blocks(&input, rounding);
            prop_assert_eq!(stats.total_blocks, texts.len());
            prop_assert!(stats.min_block_length <= stats.avg_block_length);
            prop_assert!(stats.avg_block_length <= stats.max_block_length);
        }
    }
}
