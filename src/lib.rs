pub mod shared {
    pub mod inbound {
        pub mod http;
    }
    pub mod infrastructure {
        pub mod activity_registry;
    }
}

pub mod modules {
    pub mod activities {
        pub mod core {
            pub mod activity;
            pub mod catalogue;
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod state;
        }
        pub mod use_cases {
            pub mod apply_decision;
            pub mod errors;
            pub mod list_activities {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod sign_up_for_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod unregister_from_activity {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
