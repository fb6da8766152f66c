use url::Url;

/// Optional modifiers for the list-style endpoints. Applied to the
/// request URL in the order supplied - callers should not pass
/// conflicting modifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum ListQuery
{
    PageSize(i32),
    PageToken(String),
    ExcludeNonAppCreatedData(bool),
}

impl ListQuery
{
    pub(crate) fn apply(&self, url: &mut Url)
    {
        match self
        {
            ListQuery::PageSize(size) =>
            {
                url.query_pairs_mut().append_pair("pageSize", &size.to_string());
            },
            ListQuery::PageToken(token) =>
            {
                url.query_pairs_mut().append_pair("pageToken", token);
            },
            ListQuery::ExcludeNonAppCreatedData(flag) =>
            {
                url.query_pairs_mut().append_pair("excludeNonAppCreatedData", &flag.to_string());
            },
        }
    }
}

pub(crate) fn apply_queries(url: &mut Url, queries: &[ListQuery])
{
    for query in queries
    {
        query.apply(url);
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_queries_applied_in_order()
    {
        let mut url = Url::parse("https://photoslibrary.googleapis.com/v1/albums").unwrap();

        apply_queries(&mut url, &[
            ListQuery::PageSize(1),
            ListQuery::PageToken("abc".to_owned()),
            ListQuery::ExcludeNonAppCreatedData(true),
        ]);

        assert_eq!(url.query(), Some("pageSize=1&pageToken=abc&excludeNonAppCreatedData=true"));
    }

    #[test]
    fn test_no_queries_leaves_url_unchanged()
    {
        let mut url = Url::parse("https://photoslibrary.googleapis.com/v1/albums").unwrap();

        apply_queries(&mut url, &[]);

        assert_eq!(url.query(), None);
    }
}
