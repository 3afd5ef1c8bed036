mod upstream_url;
