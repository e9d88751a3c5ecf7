use crate::Definition;
use crate::QueryVariables;
use serde::Serialize;

/// The structured form of one GraphQL query document, as produced by
/// [`parse_query`](crate::parse_query).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub(crate) id: String,
    pub(crate) bare_query: String,
    pub(crate) query_variables: QueryVariables,
    pub(crate) fragments: Vec<Definition>,
    pub(crate) data: Vec<Definition>,
    pub(crate) raw_parse: String,
}
impl ParseResult {
    /// The original query text, exactly as captured.
    pub fn bare_query(&self) -> &str {
        self.bare_query.as_str()
    }

    /// Every definition in the document (fragments included), in source
    /// order.
    pub fn data(&self) -> &[Definition] {
        self.data.as_slice()
    }

    /// Look up a fragment definition by name, e.g. to expand a
    /// `FragmentSpread` node.
    pub fn fragment(&self, name: &str) -> Option<&Definition> {
        self.fragments.iter().find(|frag| frag.name() == name)
    }

    pub fn fragments(&self) -> &[Definition] {
        self.fragments.as_slice()
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Total number of [`OperationNode`](crate::OperationNode)s across all
    /// definitions in [`data`](Self::data).
    pub fn operation_node_count(&self) -> usize {
        self.data.iter()
            .flat_map(Definition::operations)
            .map(|node| node.node_count())
            .sum()
    }

    pub fn query_variables(&self) -> &QueryVariables {
        &self.query_variables
    }

    /// A debug rendition of the grammar tree the document was parsed into.
    pub fn raw_parse(&self) -> &str {
        self.raw_parse.as_str()
    }
}
