pub mod shared {
    pub mod core {
        pub mod poll;
    }
    pub mod infrastructure {
        pub mod event_log;
    }
}

pub mod modules {
    pub mod movies {
        pub mod core {
            pub mod events;
            pub mod movie;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod api_client;
                pub mod movies_in_memory;
            }
        }
    }
}

pub mod shell;
pub mod test_support;
