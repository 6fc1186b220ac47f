//! Diesel schema for generation persistence.

diesel::table! {
    /// Generation records.
    generations (id) {
        /// Store-assigned identifier.
        id -> Uuid,
        /// Visual source kind (spline or three).
        #[max_length = 16]
        source_type -> Varchar,
        /// Optional visual source URL.
        input_url -> Nullable<Text>,
        /// Animation library (framer or gsap).
        #[max_length = 16]
        animation -> Varchar,
        /// Component display name.
        #[max_length = 64]
        name -> Varchar,
        /// Free-form options as JSONB.
        options -> Jsonb,
        /// Rendered component source.
        code -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Internal last-write timestamp, never exposed.
        updated_at -> Timestamptz,
    }
}
