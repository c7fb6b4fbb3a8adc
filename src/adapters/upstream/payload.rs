use serde::Deserialize;

/// Body shapes accepted from the number provider
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UpstreamPayload {
    Scalar(i64),
    List(Vec<i64>),
    Wrapped { numbers: Vec<i64> },
}

impl UpstreamPayload {
    pub(crate) fn into_numbers(self) -> Vec<i64> {
        match self {
            Self::Scalar(n) => vec![n],
            Self::List(numbers) | Self::Wrapped { numbers } => numbers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Vec<i64>, serde_json::Error> {
        serde_json::from_str::<UpstreamPayload>(body).map(UpstreamPayload::into_numbers)
    }

    #[test]
    fn test_accepted_shapes() {
        assert_eq!(parse("7").unwrap(), vec![7]);
        assert_eq!(parse("-3").unwrap(), vec![-3]);
        assert_eq!(parse("[2, 3, 5]").unwrap(), vec![2, 3, 5]);
        assert_eq!(parse(r#"{"numbers": [1, 1, 2]}"#).unwrap(), vec![1, 1, 2]);
        assert!(parse(r#"{"numbers": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_rejected_shapes() {
        assert!(parse("7.5").is_err());
        assert!(parse(r#""7""#).is_err());
        assert!(parse("null").is_err());
        assert!(parse(r#"{"value": 7}"#).is_err());
        assert!(parse("[1, \"two\"]").is_err());
        assert!(parse("").is_err());
    }
}
