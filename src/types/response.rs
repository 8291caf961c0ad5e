use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct Token {
    pub(crate) token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Avatar {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) image: String,
    pub(crate) category: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub(crate) struct AvatarGroup {
    pub(crate) name: String,
    pub(crate) items: Vec<Avatar>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Profile {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) color: String,
    pub(crate) avatar: Option<Avatar>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Banner {
    pub(crate) id: i32,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) image: String,
    pub(crate) movie_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct Movie {
    pub(crate) id: i32,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) image: String,
    pub(crate) year: i32,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub(crate) struct TrailOffer {
    pub(crate) id: i32,
    pub(crate) title: String,
    pub(crate) items: Vec<Movie>,
}
