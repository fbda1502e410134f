mod node_ip;
