use dc_common::api::search_request::Pagination;

pub const MAX_LIMIT: usize = 100;
pub const MAX_OFFSET: usize = 10_000;

/// Clamps caller-supplied pagination into the range the board will serve.
/// Out-of-range values are adjusted rather than rejected.
pub fn clamp_pagination(pagination: &Pagination) -> (usize, usize) {
    let limit = pagination.limit.clamp(1, MAX_LIMIT);
    let offset = pagination.offset.min(MAX_OFFSET);
    (limit, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_through_unchanged() {
        let (limit, offset) = clamp_pagination(&Pagination::default());
        assert_eq!(limit, 20);
        assert_eq!(offset, 0);
    }

    #[test]
    fn zero_limit_becomes_one() {
        let (limit, _) = clamp_pagination(&Pagination {
            limit: 0,
            offset: 0,
        });
        assert_eq!(limit, 1);
    }

    #[test]
    fn oversized_values_are_capped() {
        let (limit, offset) = clamp_pagination(&Pagination {
            limit: 5_000,
            offset: 1_000_000,
        });
        assert_eq!(limit, MAX_LIMIT);
        assert_eq!(offset, MAX_OFFSET);
    }
}
