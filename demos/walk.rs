use dragon_tree::{find_in_dict, get_inner_dict, merge_dicts, search_deep_keys};

const PLAN: &str = r#"
[resource.aws_s3_bucket.logs]
bucket = "logs"
tags = { env = "prod", team = "infra" }

[[resource.aws_s3_bucket.logs.lifecycle_rule]]
id = "expire"
enabled = true

[resource.aws_s3_bucket.logs.parent_metadata]
tags = { env = "root" }
"#;

fn main() -> Result<(), toml::de::Error> {
    let tree = toml::Value::Table(toml::from_str(PLAN)?);

    for hit in search_deep_keys("env", &tree, &[]) {
        println!("{} = {}", hit.path_string(), hit.value);
    }

    match find_in_dict(&tree, "resource/aws_s3_bucket/logs/lifecycle_rule/[0]/id") {
        Some(id) => println!("first lifecycle rule: {id}"),
        None => println!("no lifecycle rule"),
    }

    let bucket = get_inner_dict(&tree, &["resource", "aws_s3_bucket", "logs[\"eu\"]"]);
    let overrides = toml::Value::Table(toml::from_str(r#"bucket = "logs-eu""#)?);
    let merged = merge_dicts([bucket, &overrides]);
    println!("merged bucket name: {}", merged["bucket"]);

    Ok(())
}
