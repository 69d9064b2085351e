/// UUID をラップした ID 型を生成する
///
/// 生成される型は JSON では素の UUID 文字列になる。新規採番は UUID v7
/// （時刻順）で行い、永続化層から読み出した値は `from_uuid` で包み直す。
///
/// ```rust
/// use todoapp_domain::todo::TodoId;
///
/// let id = TodoId::new();
/// assert_eq!(TodoId::from_uuid(*id.as_uuid()), id);
/// ```
macro_rules! define_uuid_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(uuid::Uuid);

        impl $Name {
            /// UUID v7 で採番する
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
