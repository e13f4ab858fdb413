//! Repository wrapper that loads history for the graph.

use std::collections::HashMap;
use std::path::Path;

use git2::{ErrorCode, Oid, Sort};
use trellis_graph::{Commit, HashPool};

use crate::error::{Error, Result};

/// Which commits to load and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Start from every branch, remote branch and tag instead of `HEAD`.
    pub all: bool,

    /// Stop after this many commits.
    pub limit: Option<usize>,

    /// Order by committer date where the topology allows it.
    pub date_order: bool,
}

impl LogOptions {
    fn sorting(&self) -> Sort {
        // Children always come before their parents.
        if self.date_order {
            Sort::TOPOLOGICAL | Sort::TIME
        } else {
            Sort::TOPOLOGICAL
        }
    }
}

/// High-level wrapper around a git repository.
pub struct Repository {
    inner: git2::Repository,
}

impl Repository {
    /// Open a repository at the given path.
    ///
    /// # Errors
    /// Returns error if no repository found at path or any parent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                Error::NotARepository
            } else {
                Error::Git2(e)
            }
        })?;
        Ok(Self { inner })
    }

    /// Open the repository containing the current directory.
    ///
    /// # Errors
    /// Returns error if not inside a git repository.
    pub fn open_current() -> Result<Self> {
        Self::open(".")
    }

    /// Get the path to the repository root (workdir).
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.inner.workdir()
    }

    /// Get the path to the .git directory.
    #[must_use]
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Resolve any revision (`HEAD~2`, a branch, a short hash) to a commit.
    ///
    /// # Errors
    /// Returns error if the revision doesn't name a commit.
    pub fn resolve(&self, rev: &str) -> Result<Oid> {
        self.inner
            .revparse_single(rev)
            .and_then(|object| object.peel_to_commit())
            .map(|commit| commit.id())
            .map_err(|_| Error::RevisionNotFound(rev.to_string()))
    }

    /// Get the commit `HEAD` points to.
    ///
    /// # Errors
    /// Returns error if the repository has no commits.
    pub fn head_commit(&self) -> Result<Oid> {
        match self.inner.head() {
            Ok(head) => Ok(head.peel_to_commit()?.id()),
            Err(e) if is_unborn(&e) => Err(Error::EmptyRepository),
            Err(e) => Err(e.into()),
        }
    }

    /// Load commits children-first, interning every hash into `pool`.
    ///
    /// # Errors
    /// Returns error if the repository has no commits or the walk fails.
    pub fn load_commits(&self, pool: &mut HashPool, options: &LogOptions) -> Result<Vec<Commit>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(options.sorting())?;

        if options.all {
            revwalk.push_glob("refs/heads")?;
            revwalk.push_glob("refs/remotes")?;
            revwalk.push_glob("refs/tags")?;
            // A detached HEAD may not be reachable from any ref.
            if self.inner.head_detached().unwrap_or(false) {
                revwalk.push_head()?;
            }
        } else {
            revwalk.push(self.head_commit()?)?;
        }

        let mut decorations = self.decorations()?;
        let limit = options.limit.unwrap_or(usize::MAX);

        let mut commits = Vec::new();
        for oid in revwalk.take(limit) {
            let oid = oid?;
            let commit = self.inner.find_commit(oid)?;
            let refs = decorations.remove(&oid).unwrap_or_default();
            commits.push(to_graph_commit(pool, &commit, refs));
        }

        if commits.is_empty() {
            return Err(Error::EmptyRepository);
        }

        log::debug!(
            "loaded {} commits ({} hashes interned)",
            commits.len(),
            pool.len()
        );
        Ok(commits)
    }

    /// Ref names pointing at each commit, `HEAD` first.
    fn decorations(&self) -> Result<HashMap<Oid, Vec<String>>> {
        let mut decorations: HashMap<Oid, Vec<String>> = HashMap::new();

        let head = self.inner.head().ok();
        let head_ref = head
            .as_ref()
            .filter(|head| head.is_branch())
            .and_then(|head| head.name().map(String::from));

        if let Some(head) = &head {
            if let Ok(commit) = head.peel_to_commit() {
                let label = match head.shorthand() {
                    Some(branch) if head.is_branch() => format!("HEAD -> {branch}"),
                    _ => "HEAD".to_string(),
                };
                decorations.entry(commit.id()).or_default().push(label);
            }
        }

        for reference in self.inner.references()? {
            let reference = reference?;
            // The checked out branch is already shown as `HEAD -> branch`.
            if reference.is_note() || (head_ref.is_some() && reference.name() == head_ref.as_deref()) {
                continue;
            }
            let (Some(name), Ok(commit)) = (reference.shorthand(), reference.peel_to_commit()) else {
                continue;
            };
            decorations.entry(commit.id()).or_default().push(name.to_string());
        }

        Ok(decorations)
    }

    /// Get the underlying git2 repository (for advanced operations).
    #[must_use]
    pub const fn inner(&self) -> &git2::Repository {
        &self.inner
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.git_dir())
            .finish()
    }
}

fn is_unborn(e: &git2::Error) -> bool {
    matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound)
}

fn to_graph_commit(pool: &mut HashPool, commit: &git2::Commit<'_>, refs: Vec<String>) -> Commit {
    let hash = pool.intern(&commit.id().to_string());
    let parents = commit
        .parent_ids()
        .map(|parent| pool.intern(&parent.to_string()))
        .collect();

    let author = commit.author();
    let mut graph_commit = Commit::new(hash, parents)
        .with_author(author.name().unwrap_or_default())
        .with_subject(commit.summary().unwrap_or_default());
    graph_commit.author_email = author.email().unwrap_or_default().to_string();
    graph_commit.unix_timestamp = author.when().seconds();
    graph_commit.refs = refs;
    graph_commit
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use git2::{Signature, Time};
    use tempfile::TempDir;

    struct TestRepo {
        repo: Repository,
        clock: i64,
        _temp: TempDir,
    }

    impl TestRepo {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let inner = git2::Repository::init(temp.path()).unwrap();
            inner.set_head("refs/heads/main").unwrap();
            Self {
                repo: Repository { inner },
                clock: 1_700_000_000,
                _temp: temp,
            }
        }

        /// Commit on `branch` with the given parents, without touching the
        /// working tree.
        fn commit(&mut self, branch: &str, message: &str, parents: &[Oid]) -> Oid {
            self.clock += 60;
            let repo = &self.repo.inner;
            let sig = Signature::new("Jane Doe", "jane@example.com", &Time::new(self.clock, 0)).unwrap();
            let tree_id = repo.treebuilder(None).unwrap().write().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            let parents: Vec<git2::Commit<'_>> =
                parents.iter().map(|p| repo.find_commit(*p).unwrap()).collect();
            let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

            let oid = repo
                .commit(None, &sig, &sig, message, &tree, &parent_refs)
                .unwrap();
            repo.reference(&format!("refs/heads/{branch}"), oid, true, "test")
                .unwrap();
            oid
        }
    }

    #[test]
    fn test_linear_history_children_first() {
        let mut t = TestRepo::new();
        let a = t.commit("main", "first", &[]);
        let b = t.commit("main", "second", &[a]);
        let c = t.commit("main", "third\n\nbody", &[b]);

        let mut pool = HashPool::new();
        let commits = t.repo.load_commits(&mut pool, &LogOptions::default()).unwrap();

        let hashes: Vec<&str> = commits.iter().map(|c| pool.resolve(c.hash)).collect();
        assert_eq!(hashes, [c.to_string(), b.to_string(), a.to_string()]);

        assert_eq!(commits[0].subject, "third");
        assert_eq!(commits[0].author_name, "Jane Doe");
        assert_eq!(commits[0].author_email, "jane@example.com");
        assert_eq!(commits[0].parents, vec![commits[1].hash]);
        assert!(commits[2].is_first_commit());
        assert!(commits[0].unix_timestamp > commits[2].unix_timestamp);
    }

    #[test]
    fn test_merge_commit_keeps_parent_order() {
        let mut t = TestRepo::new();
        let a = t.commit("main", "base", &[]);
        let b = t.commit("main", "main work", &[a]);
        let c = t.commit("feature", "feature work", &[a]);
        let m = t.commit("main", "merge feature", &[b, c]);

        let mut pool = HashPool::new();
        let commits = t.repo.load_commits(&mut pool, &LogOptions::default()).unwrap();

        assert_eq!(commits.len(), 4);
        assert_eq!(pool.resolve(commits[0].hash), m.to_string());
        assert!(commits[0].is_merge());
        assert_eq!(
            commits[0].parents,
            vec![pool.get(&b.to_string()).unwrap(), pool.get(&c.to_string()).unwrap()]
        );
        assert_eq!(pool.resolve(commits[3].hash), a.to_string());
    }

    #[test]
    fn test_limit_and_all() {
        let mut t = TestRepo::new();
        let a = t.commit("main", "base", &[]);
        t.commit("main", "main work", &[a]);
        t.commit("feature", "feature work", &[a]);

        let mut pool = HashPool::new();
        let head_only = t.repo.load_commits(&mut pool, &LogOptions::default()).unwrap();
        assert_eq!(head_only.len(), 2);

        let all = LogOptions {
            all: true,
            ..LogOptions::default()
        };
        assert_eq!(t.repo.load_commits(&mut pool, &all).unwrap().len(), 3);

        let limited = LogOptions {
            limit: Some(1),
            ..all
        };
        assert_eq!(t.repo.load_commits(&mut pool, &limited).unwrap().len(), 1);
    }

    #[test]
    fn test_decorations() {
        let mut t = TestRepo::new();
        let a = t.commit("main", "base", &[]);
        let b = t.commit("main", "tip", &[a]);
        t.commit("feature", "feature work", &[a]);
        let target = t.repo.inner.find_object(a, None).unwrap();
        t.repo.inner.tag_lightweight("v1.0", &target, false).unwrap();

        let mut pool = HashPool::new();
        let commits = t.repo.load_commits(&mut pool, &LogOptions::default()).unwrap();

        assert_eq!(pool.resolve(commits[0].hash), b.to_string());
        assert_eq!(commits[0].refs, vec!["HEAD -> main".to_string()]);
        assert!(commits[1].refs.contains(&"v1.0".to_string()));
        assert!(!commits[1].refs.iter().any(|r| r == "main"));
    }

    #[test]
    fn test_resolve() {
        let mut t = TestRepo::new();
        let a = t.commit("main", "base", &[]);
        let b = t.commit("main", "tip", &[a]);

        assert_eq!(t.repo.resolve("HEAD").unwrap(), b);
        assert_eq!(t.repo.resolve("HEAD~1").unwrap(), a);
        assert_eq!(t.repo.resolve(&a.to_string()[..7]).unwrap(), a);
        assert_eq!(t.repo.head_commit().unwrap(), b);
        assert!(matches!(
            t.repo.resolve("no-such-branch"),
            Err(Error::RevisionNotFound(rev)) if rev == "no-such-branch"
        ));
    }

    #[test]
    fn test_empty_repository() {
        let t = TestRepo::new();
        let mut pool = HashPool::new();

        assert!(matches!(t.repo.head_commit(), Err(Error::EmptyRepository)));
        assert!(matches!(
            t.repo.load_commits(&mut pool, &LogOptions::default()),
            Err(Error::EmptyRepository)
        ));
    }

    #[test]
    fn test_open_discovers_from_subdirectory() {
        let t = TestRepo::new();
        let workdir = t.repo.workdir().unwrap().to_path_buf();
        let nested = workdir.join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        let repo = Repository::open(&nested).unwrap();
        assert_eq!(
            repo.git_dir().canonicalize().unwrap(),
            t.repo.git_dir().canonicalize().unwrap()
        );
    }
}
