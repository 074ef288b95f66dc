use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Upload,
    Match,
}

impl Route {
    /// `/` has no screen of its own and redirects to the upload screen.
    pub fn resolve(self) -> Self {
        match self {
            Route::Home => Route::Upload,
            other => other,
        }
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            "/" => Ok(Route::Home),
            "/upload" => Ok(Route::Upload),
            "/match" => Ok(Route::Match),
            _ => Err(format!("unknown route '{}'", s.trim())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Route::Home => "/",
            Route::Upload => "/upload",
            Route::Match => "/match",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
        assert_eq!("/upload".parse::<Route>(), Ok(Route::Upload));
        assert_eq!("/match/".parse::<Route>(), Ok(Route::Match));
    }

    #[test]
    fn home_redirects_to_upload() {
        assert_eq!(Route::Home.resolve(), Route::Upload);
        assert_eq!(Route::Match.resolve(), Route::Match);
    }

    #[test]
    fn rejects_unknown_route() {
        assert_eq!(
            "/quiz".parse::<Route>(),
            Err("unknown route '/quiz'".to_string())
        );
    }

    #[test]
    fn display_matches_path() {
        for route in [Route::Home, Route::Upload, Route::Match] {
            assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        }
    }
}
