/// Insert a deployment id into a file name, ahead of the extension.
///
/// The split happens at the first dot so multi-part extensions survive in
/// one piece.
///
/// ```
/// use shipstage::pipeline::tagged_file_name;
///
/// assert_eq!(tagged_file_name("package.tar.gz", "1234"), "package-1234.tar.gz");
/// assert_eq!(tagged_file_name("package", "deployment"), "package-deployment");
/// ```
pub fn tagged_file_name(name: &str, deployment_id: &str) -> String {
    match name.split_once('.') {
        Some((stem, extension)) => format!("{}-{}.{}", stem, deployment_id, extension),
        None => format!("{}-{}", name, deployment_id),
    }
}
