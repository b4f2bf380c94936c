use collection::Collection;
use itemizer::Itemizer;
use itemset::Itemset;
use std::error::Error;
use std::fmt;
use std::process::Command;

// Minimum support threshold, with the miner's sign convention: a positive
// value is a percentage of transactions, a negative value an exact
// transaction count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Support {
    Percent(f64),
    Count(u32),
}

impl Support {
    pub fn parse(token: &str) -> Result<Support, String> {
        let value: f64 = match token.trim().parse() {
            Ok(value) => value,
            Err(_) => return Err(format!("invalid support threshold: {}", token)),
        };
        if value > 0.0 {
            Ok(Support::Percent(value))
        } else if value < 0.0 && value.fract() == 0.0 {
            Ok(Support::Count(-value as u32))
        } else {
            Err(format!("invalid support threshold: {}", token))
        }
    }

    // The signed numeric token handed to the miner's -s option.
    pub fn to_token(&self) -> String {
        match *self {
            Support::Percent(p) => {
                if p.fract() == 0.0 {
                    format!("{}", p as i64)
                } else {
                    format!("{}", p)
                }
            }
            Support::Count(n) => format!("-{}", n),
        }
    }
}

// One external mining pass: the itemsets of the dataset that are frequent,
// maximal or closed at the given support threshold, as raw string records.
// Injected so the inverse-mining check can run against a canned miner.
pub trait Miner {
    fn mine(&self, dataset: &str, support: &Support) -> Result<Vec<Vec<String>>, Box<Error>>;
}

#[derive(Debug)]
pub struct MinerError {
    pub support_token: String,
    pub output: String,
}

impl fmt::Display for MinerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "miner failed at support {}: {}", self.support_token, self.output)
    }
}

impl Error for MinerError {
    fn description(&self) -> &str {
        "external miner failed"
    }
}

// Invokes a Borgelt-style miner (apriori/eclat) once per call:
//   <exe> -f<in-delim> -k<out-delim> -s<support> -t<type> [-v<fmt>] <file> -
// with "-" sending the mined collection to standard output.
pub struct ExternalMiner {
    pub executable: String,
    pub input_delimiter: String,
    pub output_delimiter: String,
    // s = frequent, m = maximal, c = closed.
    pub target_type: String,
    // Forwarded to -v when non-empty; opaque to this program.
    pub output_format: String,
}

impl Miner for ExternalMiner {
    fn mine(&self, dataset: &str, support: &Support) -> Result<Vec<Vec<String>>, Box<Error>> {
        let token = support.to_token();
        let mut command = Command::new(&self.executable);
        command
            .arg(format!("-f{}", self.input_delimiter))
            .arg(format!("-k{}", self.output_delimiter))
            .arg(format!("-s{}", token))
            .arg(format!("-t{}", self.target_type));
        if !self.output_format.is_empty() {
            command.arg(format!("-v{}", self.output_format));
        }
        let output = command.arg(dataset).arg("-").output()?;
        if !output.status.success() {
            return Err(Box::new(MinerError {
                support_token: token,
                output: String::from_utf8_lossy(&output.stderr).into_owned(),
            }));
        }
        let stdout = match String::from_utf8(output.stdout) {
            Ok(stdout) => stdout,
            Err(_) => {
                return Err(Box::new(MinerError {
                    support_token: token,
                    output: String::from("output is not valid UTF-8"),
                }))
            }
        };
        Ok(parse_miner_output(&stdout, &self.output_delimiter))
    }
}

// One itemset per non-empty line; a trailing " (support)" annotation is
// stripped, items split on the output delimiter and trimmed.
pub fn parse_miner_output(output: &str, delimiter: &str) -> Vec<Vec<String>> {
    let mut itemsets = vec![];
    for line in output.lines() {
        let line = match line.find('(') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let items: Vec<String> = line.split(delimiter)
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty())
            .collect();
        if !items.is_empty() {
            itemsets.push(items);
        }
    }
    itemsets
}

// Runs the miner once per requested threshold against the input dataset and
// interns the results. Collections come back in the caller's order.
pub fn load_collections(
    miner: &Miner,
    dataset: &str,
    thresholds: &[Support],
    itemizer: &mut Itemizer,
) -> Result<Vec<Collection>, Box<Error>> {
    let mut collections = Vec::with_capacity(thresholds.len());
    for threshold in thresholds {
        let raw = miner.mine(dataset, threshold)?;
        let mut itemsets = Vec::with_capacity(raw.len());
        for record in &raw {
            let tokens: Vec<&str> = record.iter().map(|t| t.as_str()).collect();
            itemsets.push(Itemset::new(itemizer.id_vec_of(&tokens)));
        }
        collections.push(Collection::new(itemsets, *threshold));
    }
    Ok(collections)
}

#[cfg(test)]
mod tests {
    use super::{parse_miner_output, Support};

    #[test]
    fn test_parse_strips_support_annotations_and_blank_lines() {
        let output = "a,b (3)\n\n  c , d \ne\n";
        let expected = vec![
            vec!["a".to_owned(), "b".to_owned()],
            vec!["c".to_owned(), "d".to_owned()],
            vec!["e".to_owned()],
        ];
        assert_eq!(parse_miner_output(output, ","), expected);
    }

    #[test]
    fn test_support_token_sign_convention() {
        let cases = [
            (Support::Percent(5.0), "5"),
            (Support::Percent(2.5), "2.5"),
            (Support::Count(7), "-7"),
            (Support::Count(1), "-1"),
        ];
        for &(support, expected) in cases.iter() {
            assert_eq!(support.to_token(), expected);
        }
    }

    #[test]
    fn test_parse_support() {
        assert_eq!(Support::parse("5"), Ok(Support::Percent(5.0)));
        assert_eq!(Support::parse(" 2.5 "), Ok(Support::Percent(2.5)));
        assert_eq!(Support::parse("-7"), Ok(Support::Count(7)));
        assert!(Support::parse("0").is_err());
        assert!(Support::parse("-2.5").is_err());
        assert!(Support::parse("many").is_err());
    }
}
