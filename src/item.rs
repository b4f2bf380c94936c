use itemizer::Itemizer;

#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id: id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
}

// Renders an itemset as one transaction line. If every token converts to an
// integer the items are ordered by that integer, otherwise lexicographically.
pub fn item_vec_to_line(items: &[Item], itemizer: &Itemizer, delimiter: &str) -> String {
    let mut tokens: Vec<&str> = items.iter().map(|&item| itemizer.str_of(item)).collect();
    let all_tokens_convert_to_ints = tokens.iter().all(|t| t.parse::<u32>().is_ok());
    if all_tokens_convert_to_ints {
        tokens.sort_by_key(|t| t.parse::<u32>().unwrap_or(0));
    } else {
        tokens.sort();
    }
    tokens.join(delimiter)
}

#[cfg(test)]
mod tests {
    use itemizer::Itemizer;

    #[test]
    fn test_numeric_tokens_order_numerically() {
        let mut itemizer = Itemizer::new();
        let items = vec![itemizer.id_of("10"), itemizer.id_of("2")];
        assert_eq!(super::item_vec_to_line(&items, &itemizer, ","), "2,10");
    }

    #[test]
    fn test_mixed_tokens_order_lexically() {
        let mut itemizer = Itemizer::new();
        let items = vec![itemizer.id_of("beer"), itemizer.id_of("10")];
        assert_eq!(super::item_vec_to_line(&items, &itemizer, " "), "10 beer");
    }
}
