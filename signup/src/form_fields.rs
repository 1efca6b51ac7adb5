/// Create an enum that can be iterated over with tab/shift-tab
#[macro_export]
macro_rules! form_fields {
    ($(#[$meta:meta])* $name:ident, $($(#[$variant_meta:meta])* $variant:ident),*) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),*
        }

        impl $name {
            /// Every option, in tab order
            const FIELDS: &'static [$name] = &[
                $($name::$variant),*
            ];

            /// Where this option sits in tab order
            fn index(self) -> usize {
                match self {
                    $(Self::$variant => $name::$variant as usize),*
                }
            }

            /// Rotate through the options (e.g. with tab)
            pub fn next(self) -> Self {
                Self::FIELDS[(self.index() + 1) % Self::FIELDS.len()]
            }

            /// Rotate through the options in reverse (e.g. with shift-tab)
            pub fn prev(self) -> Self {
                Self::FIELDS[(self.index() + Self::FIELDS.len() - 1) % Self::FIELDS.len()]
            }
        }
    };
}
