//! Request-line parsing
//!
//! Input-shape checking happens here, before the engine: one request per
//! line, exactly three whitespace-separated identifiers.

use store_core::{ActorId, AppId, ItemId};
use thiserror::Error;

/// One purchase request from the console
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Requested app
    pub app_id: AppId,
    /// Requested item
    pub item_id: ItemId,
    /// Paying user
    pub user_id: ActorId,
}

/// Request-line shape errors
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    /// Not exactly three whitespace-separated fields
    #[error("expected three inputs separated by spaces")]
    WrongArity,
}

/// Parse `app_id item_id user_id` from one input line
pub fn parse_request(line: &str) -> Result<Request, ParseError> {
    let mut fields = line.split_whitespace();
    let (Some(app), Some(item), Some(user), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(ParseError::WrongArity);
    };

    Ok(Request {
        app_id: AppId::new(app),
        item_id: ItemId::new(item),
        user_id: ActorId::new(user),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_fields_parse() {
        let request = parse_request("app1 item1 user1").unwrap();
        assert_eq!(request.app_id, AppId::new("app1"));
        assert_eq!(request.item_id, ItemId::new("item1"));
        assert_eq!(request.user_id, ActorId::new("user1"));
    }

    #[test]
    fn test_extra_whitespace_is_tolerated() {
        let request = parse_request("  app1\titem1   user1 ").unwrap();
        assert_eq!(request.user_id, ActorId::new("user1"));
    }

    #[test]
    fn test_wrong_arity_rejected() {
        assert_eq!(parse_request("app1 item1"), Err(ParseError::WrongArity));
        assert_eq!(
            parse_request("app1 item1 user1 extra"),
            Err(ParseError::WrongArity)
        );
        assert_eq!(parse_request(""), Err(ParseError::WrongArity));
    }
}
