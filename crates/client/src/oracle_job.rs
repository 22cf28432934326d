use prost::Message;

/// A job definition: an ordered list of fetch/parse tasks whose execution
/// yields the single numeric value an oracle reports.
///
/// Mirrors the `OracleJob` protobuf schema. Jobs are stored on chain in
/// length-delimited form: a varint byte-length prefix followed by the encoded
/// message, so a reader can find the message boundary without an out-of-band
/// length field.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OracleJob {
    #[prost(message, repeated, tag = "1")]
    pub tasks: ::prost::alloc::vec::Vec<oracle_job::Task>,
}

/// Nested message and enum types in `OracleJob`.
pub mod oracle_job {
    /// Fetch a URL over HTTP.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HttpTask {
        #[prost(string, optional, tag = "1")]
        pub url: ::core::option::Option<::prost::alloc::string::String>,
        #[prost(enumeration = "http_task::Method", optional, tag = "2")]
        pub method: ::core::option::Option<i32>,
        #[prost(message, repeated, tag = "3")]
        pub headers: ::prost::alloc::vec::Vec<http_task::Header>,
        #[prost(string, optional, tag = "4")]
        pub body: ::core::option::Option<::prost::alloc::string::String>,
    }
    /// Nested message and enum types in `HttpTask`.
    pub mod http_task {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Header {
            #[prost(string, optional, tag = "1")]
            pub key: ::core::option::Option<::prost::alloc::string::String>,
            #[prost(string, optional, tag = "2")]
            pub value: ::core::option::Option<::prost::alloc::string::String>,
        }
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum Method {
            Unkown = 0,
            Get = 1,
            Post = 2,
        }
    }
    /// Extract a value from a JSON document with a JSONPath expression.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct JsonParseTask {
        #[prost(string, optional, tag = "1")]
        pub path: ::core::option::Option<::prost::alloc::string::String>,
        #[prost(enumeration = "json_parse_task::AggregationMethod", optional, tag = "2")]
        pub aggregation_method: ::core::option::Option<i32>,
    }
    /// Nested message and enum types in `JsonParseTask`.
    pub mod json_parse_task {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum AggregationMethod {
            None = 0,
            Min = 1,
            Max = 2,
            Sum = 3,
        }
    }
    /// Take the median of the results of the listed subtasks.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MedianTask {
        #[prost(message, repeated, tag = "1")]
        pub tasks: ::prost::alloc::vec::Vec<Task>,
    }
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Task {
        #[prost(oneof = "task::Task", tags = "1, 2, 3")]
        pub task: ::core::option::Option<task::Task>,
    }
    /// Nested message and enum types in `Task`.
    pub mod task {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Task {
            #[prost(message, tag = "1")]
            HttpTask(super::HttpTask),
            #[prost(message, tag = "2")]
            JsonParseTask(super::JsonParseTask),
            #[prost(message, tag = "3")]
            MedianTask(super::MedianTask),
        }
    }
}

impl oracle_job::Task {
    /// An HTTP GET fetch task.
    pub fn http(url: impl Into<String>) -> Self {
        Self {
            task: Some(oracle_job::task::Task::HttpTask(oracle_job::HttpTask {
                url: Some(url.into()),
                ..Default::default()
            })),
        }
    }

    /// A JSONPath extraction task.
    pub fn json_parse(path: impl Into<String>) -> Self {
        Self {
            task: Some(oracle_job::task::Task::JsonParseTask(
                oracle_job::JsonParseTask {
                    path: Some(path.into()),
                    ..Default::default()
                },
            )),
        }
    }

    /// A median over the results of the given subtasks.
    pub fn median(tasks: Vec<Self>) -> Self {
        Self {
            task: Some(oracle_job::task::Task::MedianTask(oracle_job::MedianTask {
                tasks,
            })),
        }
    }
}

impl OracleJob {
    /// Create a job from an ordered list of tasks.
    pub fn new(tasks: Vec<oracle_job::Task>) -> Self {
        Self { tasks }
    }

    /// Encode in length-delimited form: varint length prefix, then the
    /// encoded message.
    pub fn encode_delimited(&self) -> Vec<u8> {
        self.encode_length_delimited_to_vec()
    }

    /// Decode a job from its length-delimited form.
    pub fn decode_delimited(data: &[u8]) -> crate::Result<Self> {
        Ok(Self::decode_length_delimited(data)?)
    }
}
