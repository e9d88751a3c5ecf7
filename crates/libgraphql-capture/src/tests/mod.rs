mod operation_node_tests;
mod pipeline_tests;
mod value_normalizer_tests;
